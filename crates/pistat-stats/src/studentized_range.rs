//! Distribution of the studentized range.
//!
//! Used by Tukey's HSD to turn a pairwise `q` statistic into a p-value and
//! to find the critical `q` for simultaneous confidence intervals. Both
//! directions come from `anofox-statistics`, whose `ptukey` and `qtukey`
//! follow R: Copenhaver-Holland Gauss-Legendre quadrature for the CDF and a
//! secant search from the Odeh-Evans starting point for the quantile.

use anofox_statistics::posthoc::{ptukey, qtukey};

use crate::{StatsError, error::ensure_probability};

/// Means are compared as a single family.
const RANGES: f64 = 1.0;

/// `P(Q <= q)` for the range of `means` studentized means with `df` error
/// degrees of freedom.
///
/// # Errors
///
/// Returns [`StatsError::Distribution`] if `means < 2` or `df < 2`.
///
/// # Examples
///
/// ```
/// use pistat_stats::studentized_range;
///
/// let p = studentized_range::cdf(3.877, 3, 10.0).unwrap();
/// assert!((p - 0.95).abs() < 1e-3);
/// ```
pub fn cdf(q: f64, means: usize, df: f64) -> Result<f64, StatsError> {
    let means = validate(means, df)?;
    if q <= 0.0 {
        return Ok(0.0);
    }
    finite(ptukey(q, means, df, RANGES, true))
}

/// Smallest `q` with `cdf(q, means, df) >= p`, to the accuracy of the
/// secant search (about 1e-4).
///
/// # Errors
///
/// Returns [`StatsError::InvalidProbability`] unless `0 < p < 1`, and
/// [`StatsError::Distribution`] for invalid `means` or `df`.
///
/// # Examples
///
/// ```
/// use pistat_stats::studentized_range;
///
/// let q = studentized_range::quantile(0.95, 3, 10.0).unwrap();
/// assert!((q - 3.877).abs() < 1e-3);
/// ```
pub fn quantile(p: f64, means: usize, df: f64) -> Result<f64, StatsError> {
    ensure_probability(p)?;
    let means = validate(means, df)?;
    finite(qtukey(p, means, df, RANGES, true))
}

#[expect(clippy::cast_precision_loss)]
fn validate(means: usize, df: f64) -> Result<f64, StatsError> {
    if means < 2 || df.is_nan() || df < 2.0 {
        return Err(StatsError::Distribution {
            name: "studentized range",
        });
    }
    Ok(means as f64)
}

fn finite(value: f64) -> Result<f64, StatsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::Distribution {
            name: "studentized range",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_published_critical_values() {
        // q(0.95; 3, 10) = 3.877, q(0.95; 4, 20) = 3.958
        assert_close(quantile(0.95, 3, 10.0).unwrap(), 3.876_776_7, 1e-3);
        assert_close(quantile(0.95, 4, 20.0).unwrap(), 3.958_3, 1e-3);
    }

    #[test]
    fn test_phase_critical_value() {
        assert_close(quantile(0.95, 3, 16.0).unwrap(), 3.649_138_885_164_822_5, 1e-4);
        assert_close(quantile(0.95, 7, 57.0).unwrap(), 4.321_901_531_825_738, 1e-4);
    }

    #[test]
    fn test_cdf_is_monotone() {
        let values = [0.5, 1.0, 2.0, 3.0, 4.0, 6.0]
            .map(|q| cdf(q, 3, 16.0).unwrap());
        assert!(values.is_sorted());
        assert!(values[0] > 0.0);
        assert!(values[5] > 0.99 && values[5] <= 1.0);
    }

    #[test]
    fn test_cdf_edges() {
        assert_eq!(cdf(0.0, 3, 10.0).unwrap(), 0.0);
        assert_eq!(cdf(-1.0, 3, 10.0).unwrap(), 0.0);
        assert!(cdf(1.0, 1, 10.0).is_err());
        assert!(cdf(1.0, 3, 1.0).is_err());
        assert!(quantile(1.0, 3, 10.0).is_err());
    }
}
