use serde::{Deserialize, Serialize};

/// Disease phase a patient group was observed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[display("Intercritical Phase")]
    Intercritical,
    #[display("Frequent Crisis Phase")]
    FrequentCrisis,
    #[display("Critical Phase")]
    Critical,
}

impl Phase {
    /// All phases, in clinical order.
    pub const ALL: [Self; 3] = [Self::Intercritical, Self::FrequentCrisis, Self::Critical];

    /// Short group label used in post-hoc comparison tables.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Intercritical => "Intercritical",
            Self::FrequentCrisis => "Frequent",
            Self::Critical => "Critical",
        }
    }
}

/// One PI level of a phase table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseRow {
    pub pi: f64,
    pub patient_count: u32,
    pub pic: u32,
}

/// Patient counts per PI level within one disease phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTable {
    pub phase: Phase,
    pub rows: Vec<PhaseRow>,
}

impl PhaseTable {
    pub(crate) fn from_columns(phase: Phase, pi: &[f64], patient_count: &[u32], pic: &[u32]) -> Self {
        let rows = pi
            .iter()
            .zip(patient_count)
            .zip(pic)
            .map(|((&pi, &patient_count), &pic)| PhaseRow {
                pi,
                patient_count,
                pic,
            })
            .collect();
        Self { phase, rows }
    }

    #[must_use]
    pub fn pi_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.pi).collect()
    }

    #[must_use]
    pub fn patient_counts(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.patient_count).collect()
    }

    #[must_use]
    pub fn total_patients(&self) -> u32 {
        self.rows.iter().map(|r| r.patient_count).sum()
    }
}
