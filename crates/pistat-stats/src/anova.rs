//! One-way analysis of variance.

use anofox_statistics::parametric::anova::{AnovaKind, one_way_anova};
use serde::Serialize;

use crate::{
    StatsError, descriptive,
    error::{ensure_finite, ensure_min_len},
};

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OneWayAnova {
    /// The F statistic, `ms_between / ms_within`.
    pub f: f64,
    /// Upper-tail probability of `f` under equal group means.
    pub p_value: f64,
    /// Number of groups minus one.
    pub df_between: usize,
    /// Number of observations minus the number of groups.
    pub df_within: usize,
    /// Squared deviations of the group means from the grand mean, weighted
    /// by group size.
    pub ss_between: f64,
    /// Squared deviations of each observation from its group mean.
    pub ss_within: f64,
    /// Mean squared error within groups, reused by post-hoc tests.
    pub ms_within: f64,
}

/// Tests whether two or more groups share a common mean (Fisher's ANOVA,
/// equal variances assumed).
///
/// # Errors
///
/// * [`StatsError::TooFewGroups`] - fewer than two groups
/// * [`StatsError::EmptyGroup`] - a group has no observations
/// * [`StatsError::TooFewObservations`] - a group has a single observation
/// * [`StatsError::ZeroVariance`] - every group is constant
///
/// # Examples
///
/// ```
/// use pistat_stats::anova::one_way;
///
/// let result = one_way(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(result.df_between, 1);
/// assert_eq!(result.df_within, 4);
/// assert!((result.f - 13.5).abs() < 1e-12);
/// ```
pub fn one_way(groups: &[&[f64]]) -> Result<OneWayAnova, StatsError> {
    validate_groups(groups)?;
    groups.iter().try_for_each(|g| ensure_min_len(g, 2))?;
    if groups.iter().all(|g| descriptive::sum_of_squares(g) <= 0.0) {
        return Err(StatsError::ZeroVariance);
    }

    let result =
        one_way_anova(groups, AnovaKind::Fisher).map_err(StatsError::from_anofox("one-way ANOVA"))?;
    let (Some(ss_between), Some(ss_within), Some(ms_within)) =
        (result.ss_between, result.ss_within, result.ms_within)
    else {
        return Err(StatsError::Backend {
            test: "one-way ANOVA",
            message: "no sums of squares in the result".to_owned(),
        });
    };

    let total = groups.iter().map(|g| g.len()).sum::<usize>();
    Ok(OneWayAnova {
        f: result.statistic,
        p_value: result.p_value,
        df_between: groups.len() - 1,
        df_within: total - groups.len(),
        ss_between,
        ss_within,
        ms_within,
    })
}

pub(crate) fn validate_groups(groups: &[&[f64]]) -> Result<(), StatsError> {
    if groups.len() < 2 {
        return Err(StatsError::TooFewGroups {
            required: 2,
            actual: groups.len(),
        });
    }
    if let Some(index) = groups.iter().position(|g| g.is_empty()) {
        return Err(StatsError::EmptyGroup { index });
    }
    groups.iter().try_for_each(|g| ensure_finite(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERCRITICAL: [f64; 6] = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    const FREQUENT: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    const CRITICAL: [f64; 7] = [1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];

    #[test]
    fn test_phase_tables() {
        let result = one_way(&[&INTERCRITICAL, &FREQUENT, &CRITICAL]).unwrap();
        assert!((result.f - 56.521_303_258_145_36).abs() < 1e-9);
        assert!((result.p_value - 5.585_921_746_998_382_5e-8).abs() < 1e-12);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 16);
        assert!((result.ms_within - 0.039_375).abs() < 1e-12);
        assert!((result.ss_within - 0.63).abs() < 1e-12);
    }

    #[test]
    fn test_identical_means_give_zero_f() {
        let result = one_way(&[&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]]).unwrap();
        assert!(result.f.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_groups() {
        assert_eq!(
            one_way(&[&INTERCRITICAL]).unwrap_err(),
            StatsError::TooFewGroups {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(
            one_way(&[&INTERCRITICAL, &[]]).unwrap_err(),
            StatsError::EmptyGroup { index: 1 }
        );
        assert_eq!(
            one_way(&[&[1.0, 1.0], &[2.0, 2.0]]).unwrap_err(),
            StatsError::ZeroVariance
        );
        assert_eq!(
            one_way(&[&INTERCRITICAL, &[2.0]]).unwrap_err(),
            StatsError::TooFewObservations {
                required: 2,
                actual: 1
            }
        );
    }
}
