//! Kruskal-Wallis H test, the rank-based counterpart of one-way ANOVA.

use anofox_statistics::nonparametric::kruskal::kruskal_wallis as kruskal_h;
use serde::Serialize;

use crate::{StatsError, anova::validate_groups, error::ensure_varies};

/// Result of a Kruskal-Wallis test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KruskalWallis {
    /// The tie-corrected H statistic.
    pub h: f64,
    /// Degrees of freedom of the chi-squared reference (groups - 1).
    pub df: usize,
    /// Upper-tail chi-squared probability of `h`.
    pub p_value: f64,
}

/// Tests whether two or more groups come from the same distribution.
///
/// Observations are ranked jointly with ties sharing their average rank,
/// and `H` is divided by `1 - Σ(t³ - t) / (N³ - N)` to correct for ties.
///
/// # Errors
///
/// * [`StatsError::TooFewGroups`] - fewer than two groups
/// * [`StatsError::EmptyGroup`] - a group has no observations
/// * [`StatsError::ConstantInput`] - every observation is identical
///
/// # Examples
///
/// ```
/// use pistat_stats::kruskal::kruskal_wallis;
///
/// let result = kruskal_wallis(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(result.df, 1);
/// assert!(result.p_value < 0.05);
/// ```
pub fn kruskal_wallis(groups: &[&[f64]]) -> Result<KruskalWallis, StatsError> {
    validate_groups(groups)?;
    // the tie correction vanishes when every value is tied
    ensure_varies(&groups.concat())?;

    let result = kruskal_h(groups).map_err(StatsError::from_anofox("Kruskal-Wallis"))?;
    Ok(KruskalWallis {
        h: result.statistic,
        df: groups.len() - 1,
        p_value: result.p_value,
    })
}
