use pistat_stats::{
    StatsError,
    correlation::{self, Correlation},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
}

/// A correlation between two named variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// What was correlated, e.g. `"PI and NRS"`.
    pub label: String,
    pub method: CorrelationMethod,
    #[serde(flatten)]
    pub result: Correlation,
}

impl CorrelationResult {
    pub fn compute(
        label: &str,
        method: CorrelationMethod,
        x: &[f64],
        y: &[f64],
    ) -> Result<Self, StatsError> {
        let result = match method {
            CorrelationMethod::Pearson => correlation::pearson(x, y)?,
            CorrelationMethod::Spearman => correlation::spearman(x, y)?,
        };
        tracing::debug!(
            label,
            %method,
            coefficient = result.coefficient,
            p_value = result.p_value,
            "correlation computed"
        );
        Ok(Self {
            label: label.to_owned(),
            method,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_dispatch() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 4.0, 9.0, 16.0];
        let pearson = CorrelationResult::compute("x and y", CorrelationMethod::Pearson, &x, &y).unwrap();
        let spearman =
            CorrelationResult::compute("x and y", CorrelationMethod::Spearman, &x, &y).unwrap();
        assert!(pearson.result.coefficient < 1.0);
        assert!((spearman.result.coefficient - 1.0).abs() < 1e-12);
        assert_eq!(spearman.method.to_string(), "Spearman");
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            CorrelationResult::compute("x", CorrelationMethod::Pearson, &[1.0, 2.0, 3.0], &[1.0])
                .unwrap_err(),
            StatsError::LengthMismatch { left: 3, right: 1 }
        );
    }
}
