use pistat_dataset::DatasetError;
use pistat_stats::StatsError;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    #[display("invalid dataset")]
    Dataset(DatasetError),
    #[display("{step} failed")]
    #[from(skip)]
    Stats {
        step: &'static str,
        source: StatsError,
    },
    #[display("significance level must lie in (0, 1), got {alpha}")]
    #[from(skip)]
    InvalidAlpha { alpha: f64 },
}

/// Attaches the name of the failing analysis step to a statistics error.
pub(crate) trait StepContext<T> {
    fn step(self, step: &'static str) -> Result<T, AnalysisError>;
}

impl<T> StepContext<T> for Result<T, StatsError> {
    fn step(self, step: &'static str) -> Result<T, AnalysisError> {
        self.map_err(|source| AnalysisError::Stats { step, source })
    }
}
