//! Shapiro-Wilk test for normality
//!
//! Delegates to the `normality` crate, which implements
//! Royston's approximation (Applied Statistics algorithm AS R94) for samples
//! of 3 to 5000 observations. The sample is validated here first so callers
//! see the same [`StatsError`] for the same mistake regardless of which test
//! they run.
//!
//! Small p-values reject normality. The test only reports evidence; deciding
//! what "normal enough" means is up to the caller.
//!
//! # Examples
//!
//! ```
//! use pistat_stats::normality::shapiro_wilk;
//!
//! let result = shapiro_wilk(&[0.4, 0.5, 0.6, 0.7, 0.8, 0.9]).unwrap();
//! assert!(result.w > 0.98);
//! assert!(result.p_value > 0.05);
//! ```

use serde::Serialize;

use crate::{
    StatsError,
    error::{ensure_finite, ensure_min_len, ensure_varies},
};

/// Smallest sample the test is defined for.
pub const MIN_SAMPLES: usize = 3;
/// Largest sample the approximation is calibrated for.
pub const MAX_SAMPLES: usize = 5000;

/// Outcome of a Shapiro-Wilk test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapiroWilk {
    /// The W statistic, in (0, 1]; values near 1 look normal.
    pub w: f64,
    /// Probability of a W this small under normality.
    pub p_value: f64,
}

/// Runs the Shapiro-Wilk test on an unsorted sample.
///
/// # Errors
///
/// * [`StatsError::TooFewObservations`] - fewer than [`MIN_SAMPLES`] values
/// * [`StatsError::TooManyObservations`] - more than [`MAX_SAMPLES`] values
/// * [`StatsError::NonFiniteValue`] - the sample contains NaN or infinity
/// * [`StatsError::ConstantInput`] - all values are identical
pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk, StatsError> {
    ensure_min_len(values, MIN_SAMPLES)?;
    if values.len() > MAX_SAMPLES {
        return Err(StatsError::TooManyObservations {
            limit: MAX_SAMPLES,
            actual: values.len(),
        });
    }
    ensure_finite(values)?;
    ensure_varies(values)?;

    let result = ::normality::shapiro_wilk(values.iter().copied())?;
    Ok(ShapiroWilk {
        w: result.statistic,
        p_value: result.p_value,
    })
}
