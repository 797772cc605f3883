//! Two-sample t-tests for independent groups.

use anofox_statistics::parametric::ttest::{Alternative, TTestKind, t_test};
use serde::Serialize;

use crate::{
    StatsError, descriptive,
    error::{ensure_finite, ensure_min_len},
};

/// Result of a two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTest {
    /// `(mean(a) - mean(b)) / se`.
    pub t: f64,
    /// Degrees of freedom; fractional for Welch's test.
    pub df: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

/// Student's t-test assuming equal variances (pooled standard error).
///
/// # Errors
///
/// * [`StatsError::TooFewObservations`] - a sample has fewer than two values
/// * [`StatsError::ZeroVariance`] - both samples are constant
///
/// # Examples
///
/// ```
/// use pistat_stats::ttest::student;
///
/// let result = student(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(result.df, 4.0);
/// assert!(result.t < 0.0);
/// ```
pub fn student(a: &[f64], b: &[f64]) -> Result<TTest, StatsError> {
    run(a, b, TTestKind::Student, "Student's t-test")
}

/// Welch's t-test for unequal variances, with Welch-Satterthwaite degrees
/// of freedom.
///
/// # Errors
///
/// Same as [`student`].
pub fn welch(a: &[f64], b: &[f64]) -> Result<TTest, StatsError> {
    run(a, b, TTestKind::Welch, "Welch's t-test")
}

fn run(a: &[f64], b: &[f64], kind: TTestKind, test: &'static str) -> Result<TTest, StatsError> {
    ensure_min_len(a, 2)?;
    ensure_min_len(b, 2)?;
    ensure_finite(a)?;
    ensure_finite(b)?;
    if descriptive::sum_of_squares(a) <= 0.0 && descriptive::sum_of_squares(b) <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let result = t_test(a, b, kind, Alternative::TwoSided, 0.0, None)
        .map_err(StatsError::from_anofox(test))?;
    Ok(TTest {
        t: result.statistic,
        df: result.df,
        p_value: result.p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERCRITICAL: [f64; 6] = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    const FREQUENT: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    const CRITICAL: [f64; 7] = [1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_student_phase_pairs() {
        let inter_crit = student(&INTERCRITICAL, &CRITICAL).unwrap();
        assert_close(inter_crit.t, -9.279_678_121_330_66, 1e-9);
        assert_close(inter_crit.p_value, 1.552_234_329_710_237_4e-6, 1e-10);
        assert_close(inter_crit.df, 11.0, 1e-12);

        let inter_freq = student(&INTERCRITICAL, &FREQUENT).unwrap();
        assert_close(inter_freq.t, -0.925_820_099_772_551_3, 1e-9);
        assert_close(inter_freq.p_value, 0.376_341_738_019_117_86, 1e-8);
        assert_close(inter_freq.df, 10.0, 1e-12);

        let freq_crit = student(&FREQUENT, &CRITICAL).unwrap();
        assert_close(freq_crit.t, -8.395_899_252_632_502, 1e-9);
        assert_close(freq_crit.p_value, 4.114_723_670_602_382e-6, 1e-10);
    }

    #[test]
    fn test_welch_phase_pair() {
        let result = welch(&INTERCRITICAL, &CRITICAL).unwrap();
        assert_close(result.t, -9.391_485_505_499_116, 1e-9);
        assert_close(result.df, 10.993_485_342_019_547, 1e-9);
        assert_close(result.p_value, 1.385_578_900_776_496_3e-6, 1e-10);
    }

    #[test]
    fn test_sign_follows_argument_order() {
        let forward = student(&INTERCRITICAL, &CRITICAL).unwrap();
        let backward = student(&CRITICAL, &INTERCRITICAL).unwrap();
        assert_close(forward.t, -backward.t, 1e-12);
        assert_close(forward.p_value, backward.p_value, 1e-15);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            student(&[1.0], &[1.0, 2.0]),
            Err(StatsError::TooFewObservations { .. })
        ));
        assert_eq!(
            welch(&[1.0, 1.0], &[2.0, 2.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
    }
}
