//! Pearson and Spearman correlation with two-sided significance.
//!
//! Both coefficients are tested against zero with Student's t at `n - 2`
//! degrees of freedom, `t = r * sqrt((n - 2) / (1 - r^2))`. For Spearman's
//! rho this is the usual large-sample approximation. A perfect correlation
//! has an infinite `t` and a p-value of zero.

use anofox_statistics::correlation::{self as backend, CorrelationResult};
use serde::Serialize;

use crate::{
    StatsError,
    error::{ensure_finite, ensure_min_len, ensure_varies},
};

/// Smallest number of pairs with a defined significance test.
pub const MIN_PAIRS: usize = 3;

/// A correlation coefficient and its p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    /// Coefficient in [-1, 1].
    pub coefficient: f64,
    /// Two-sided p-value for a zero correlation.
    pub p_value: f64,
    /// Number of pairs.
    pub n: usize,
}

impl From<CorrelationResult> for Correlation {
    fn from(result: CorrelationResult) -> Self {
        Self {
            coefficient: result.estimate,
            p_value: result.p_value,
            n: result.n,
        }
    }
}

/// Pearson product-moment correlation.
///
/// # Errors
///
/// * [`StatsError::LengthMismatch`] - `x` and `y` differ in length
/// * [`StatsError::TooFewObservations`] - fewer than [`MIN_PAIRS`] pairs
/// * [`StatsError::ConstantInput`] - either sequence is constant
///
/// # Examples
///
/// ```
/// use pistat_stats::correlation::pearson;
///
/// let result = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert!((result.coefficient - 1.0).abs() < 1e-12);
/// assert!(result.p_value < 1e-12);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Correlation, StatsError> {
    validate_pairs(x, y)?;
    backend::pearson(x, y, None)
        .map(Correlation::from)
        .map_err(StatsError::from_anofox("Pearson correlation"))
}

/// Spearman rank correlation: Pearson's r on average ranks.
///
/// # Errors
///
/// Same as [`pearson`].
///
/// # Examples
///
/// ```
/// use pistat_stats::correlation::spearman;
///
/// // monotone but not linear
/// let result = spearman(&[1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0]).unwrap();
/// assert!((result.coefficient - 1.0).abs() < 1e-12);
/// ```
pub fn spearman(x: &[f64], y: &[f64]) -> Result<Correlation, StatsError> {
    validate_pairs(x, y)?;
    backend::spearman(x, y, None)
        .map(Correlation::from)
        .map_err(StatsError::from_anofox("Spearman correlation"))
}

fn validate_pairs(x: &[f64], y: &[f64]) -> Result<(), StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    ensure_min_len(x, MIN_PAIRS)?;
    ensure_finite(x)?;
    ensure_finite(y)?;
    ensure_varies(x)?;
    ensure_varies(y)
}
