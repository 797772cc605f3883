use serde::{Deserialize, Serialize};

/// Pain-intensity scores of the patients sharing one PI level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NrsGroup {
    /// Display label, e.g. `"Group 1 (PI 1.4)"`.
    pub label: String,
    /// PI level the group is associated with.
    pub pi: f64,
    /// Integer NRS scores; groups differ in size.
    pub scores: Vec<u32>,
}

impl NrsGroup {
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.scores.iter().map(|&s| f64::from(s)).collect()
    }

    /// Mean score, `None` for an empty group.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum = self.scores.iter().map(|&s| f64::from(s)).sum::<f64>();
        Some(sum / self.scores.len() as f64)
    }
}

/// NRS groups ordered by PI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NrsTable {
    pub groups: Vec<NrsGroup>,
}

impl NrsTable {
    #[must_use]
    pub fn pi_values(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.pi).collect()
    }

    /// Per-group means, skipping empty groups.
    #[must_use]
    pub fn means(&self) -> Vec<f64> {
        self.groups.iter().filter_map(NrsGroup::mean).collect()
    }

    /// All scores of all groups, in table order.
    #[must_use]
    pub fn pooled_values(&self) -> Vec<f64> {
        self.groups.iter().flat_map(NrsGroup::values).collect()
    }
}
