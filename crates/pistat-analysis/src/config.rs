use serde::{Deserialize, Serialize};

/// Significance level used when none is given.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Parameters shared by every step of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Significance level for normality, omnibus and post-hoc decisions.
    pub alpha: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}
