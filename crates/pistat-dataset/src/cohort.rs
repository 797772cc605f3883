//! The cohort: every table one analysis run consumes.
//!
//! # Serialization
//!
//! A cohort round-trips through JSON with the shape below. The duration
//! bounds are optional.
//!
//! ```json
//! {
//!   "phases": [
//!     { "phase": "intercritical", "rows": [{ "pi": 0.4, "patient_count": 31, "pic": 4 }] }
//!   ],
//!   "nrs": {
//!     "groups": [{ "label": "Group 1 (PI 1.4)", "pi": 1.4, "scores": [45, 42, 47] }]
//!   },
//!   "pain_duration": {
//!     "rows": [{ "pi": 1.4, "min_hours": 5.0, "max_hours": 12.0, "mean_duration": 8.5 }]
//!   }
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    DatasetError, NrsGroup, NrsTable, PainDurationRow, PainDurationTable, Phase, PhaseTable,
};

/// Phase tables, NRS groups and pain durations of one patient cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub phases: Vec<PhaseTable>,
    pub nrs: NrsTable,
    pub pain_duration: PainDurationTable,
}

impl Cohort {
    /// The clinical cohort the analyses were designed around.
    ///
    /// # Examples
    ///
    /// ```
    /// use pistat_dataset::{Cohort, Phase};
    ///
    /// let cohort = Cohort::builtin();
    /// cohort.validate().unwrap();
    /// assert_eq!(cohort.phase(Phase::Critical).unwrap().rows.len(), 7);
    /// assert_eq!(cohort.nrs.groups.len(), 7);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let phases = vec![
            PhaseTable::from_columns(
                Phase::Intercritical,
                &[0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
                &[31, 39, 21, 13, 5, 3],
                &[4, 5, 6, 7, 8, 9],
            ),
            PhaseTable::from_columns(
                Phase::FrequentCrisis,
                &[0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
                &[2, 6, 12, 7, 6, 5],
                &[5, 6, 7, 8, 9, 10],
            ),
            PhaseTable::from_columns(
                Phase::Critical,
                &[1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0],
                &[10, 15, 8, 12, 10, 9, 6],
                &[14, 15, 16, 17, 18, 19, 20],
            ),
        ];

        let nrs_scores: [(f64, &[u32]); 7] = [
            (1.4, &[45, 42, 47, 48, 45, 43, 42, 49, 50, 43]),
            (1.5, &[47, 48, 45, 49, 50, 54, 47, 59, 60, 43]),
            (1.6, &[59, 54, 50, 60, 58, 57, 65, 63]),
            (1.7, &[52, 54, 48, 59, 57, 62, 64, 58, 50, 49, 60, 55]),
            (1.8, &[70, 68, 66, 73, 69, 72, 71, 67, 70, 72]),
            (1.9, &[76, 80, 82, 81, 75, 77, 79, 84]),
            (2.0, &[82, 87, 91, 79, 92, 85]),
        ];
        let groups = nrs_scores
            .iter()
            .enumerate()
            .map(|(i, &(pi, scores))| NrsGroup {
                label: format!("Group {} (PI {pi:.1})", i + 1),
                pi,
                scores: scores.to_vec(),
            })
            .collect();

        let rows = [
            (1.4, 5.0, 12.0, 8.5),
            (1.5, 6.0, 12.0, 9.0),
            (1.6, 8.0, 24.0, 16.0),
            (1.7, 7.0, 24.0, 15.5),
            (1.8, 12.0, 24.0, 18.0),
            (1.9, 24.0, 48.0, 36.0),
            (2.0, 24.0, 80.0, 52.0),
        ]
        .into_iter()
        .map(|(pi, min, max, mean_duration)| PainDurationRow {
            pi,
            min_hours: Some(min),
            max_hours: Some(max),
            mean_duration,
        })
        .collect();

        Self {
            phases,
            nrs: NrsTable { groups },
            pain_duration: PainDurationTable { rows },
        }
    }

    /// Looks up the table of one phase.
    pub fn phase(&self, phase: Phase) -> Result<&PhaseTable, DatasetError> {
        self.phases
            .iter()
            .find(|t| t.phase == phase)
            .ok_or(DatasetError::MissingPhase { phase })
    }

    /// Checks the structure of the cohort.
    ///
    /// Every phase must appear exactly once and no table may be empty. PI
    /// values that do not increase within a table are only logged.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for table in &self.phases {
            if !seen.insert(table.phase) {
                return Err(DatasetError::DuplicatePhase { phase: table.phase });
            }
            if table.rows.is_empty() {
                return Err(DatasetError::EmptyTable {
                    table: table.phase.to_string(),
                });
            }
            warn_unless_increasing(&table.phase.to_string(), &table.pi_values());
        }
        if let Some(&phase) = Phase::ALL.iter().find(|p| !seen.contains(*p)) {
            return Err(DatasetError::MissingPhase { phase });
        }

        if self.nrs.groups.is_empty() {
            return Err(DatasetError::EmptyTable {
                table: "NRS".to_owned(),
            });
        }
        let mut labels = HashSet::new();
        for group in &self.nrs.groups {
            if !labels.insert(group.label.as_str()) {
                return Err(DatasetError::DuplicateGroup {
                    label: group.label.clone(),
                });
            }
            if group.scores.is_empty() {
                return Err(DatasetError::EmptyTable {
                    table: group.label.clone(),
                });
            }
        }
        warn_unless_increasing("NRS", &self.nrs.pi_values());

        if self.pain_duration.rows.is_empty() {
            return Err(DatasetError::EmptyTable {
                table: "pain duration".to_owned(),
            });
        }
        warn_unless_increasing("pain duration", &self.pain_duration.pi_values());

        Ok(())
    }
}

fn warn_unless_increasing(table: &str, pi_values: &[f64]) {
    if let Some(pair) = pi_values.windows(2).find(|w| w[0] >= w[1]) {
        tracing::warn!(
            table,
            previous = pair[0],
            next = pair[1],
            "PI values are not strictly increasing"
        );
    }
}
