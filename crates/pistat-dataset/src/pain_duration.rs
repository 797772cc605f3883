use serde::{Deserialize, Serialize};

/// Headache duration observed at one PI level, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PainDurationRow {
    pub pi: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hours: Option<f64>,
    pub mean_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainDurationTable {
    pub rows: Vec<PainDurationRow>,
}

impl PainDurationTable {
    #[must_use]
    pub fn pi_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.pi).collect()
    }

    #[must_use]
    pub fn mean_durations(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.mean_duration).collect()
    }
}
