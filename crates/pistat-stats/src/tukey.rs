//! Tukey's honestly significant difference test.
//!
//! Compares every pair of groups after a one-way ANOVA, controlling the
//! family-wise error rate through the studentized range distribution.
//! Unequal group sizes use the Tukey-Kramer standard error.
//!
//! Pairs are reported in label order: groups are sorted by label and each
//! pair `(group1, group2)` has `group1 < group2`, with the mean difference
//! taken as `mean(group2) - mean(group1)`.

use std::collections::HashSet;

use serde::Serialize;

use crate::{StatsError, anova, descriptive, error::ensure_probability, studentized_range};

/// One pairwise comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TukeyPair {
    /// Label that sorts first.
    pub group1: String,
    /// Label that sorts second.
    pub group2: String,
    /// `mean(group2) - mean(group1)`.
    pub mean_diff: f64,
    /// Tukey-Kramer standard error, `sqrt(ms_within / 2 * (1/n1 + 1/n2))`.
    pub std_err: f64,
    /// Studentized range statistic, `|mean_diff| / std_err`.
    pub q: f64,
    /// Family-wise adjusted p-value.
    pub p_adj: f64,
    /// Lower bound of the simultaneous confidence interval for `mean_diff`.
    pub lower: f64,
    /// Upper bound of the simultaneous confidence interval for `mean_diff`.
    pub upper: f64,
    /// Whether the difference is significant at the family-wise `alpha`.
    pub reject: bool,
}

/// Result of Tukey's HSD over all pairs of groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TukeyHsd {
    /// Family-wise significance level.
    pub alpha: f64,
    /// Critical studentized range at `1 - alpha`.
    pub q_crit: f64,
    /// Error degrees of freedom of the underlying ANOVA.
    pub df_within: usize,
    /// Mean squared error of the underlying ANOVA.
    pub ms_within: f64,
    /// Every pair of groups, in label order.
    pub pairs: Vec<TukeyPair>,
}

impl TukeyHsd {
    /// Finds the comparison between two labels, in either order.
    #[must_use]
    pub fn pair(&self, a: &str, b: &str) -> Option<&TukeyPair> {
        self.pairs
            .iter()
            .find(|p| (p.group1 == a && p.group2 == b) || (p.group1 == b && p.group2 == a))
    }
}

/// Runs Tukey's HSD on labelled groups.
///
/// # Errors
///
/// * [`StatsError::DuplicateLabel`] - two groups share a label
/// * [`StatsError::InvalidProbability`] - `alpha` outside (0, 1)
/// * any error of [`anova::one_way`] on the same groups
///
/// # Examples
///
/// ```
/// use pistat_stats::tukey::tukey_hsd;
///
/// let a = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
/// let b = [1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];
/// let result = tukey_hsd(&[("a", a.as_slice()), ("b", b.as_slice())], 0.05).unwrap();
/// assert_eq!(result.pairs.len(), 1);
/// assert!(result.pairs[0].reject);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn tukey_hsd(groups: &[(&str, &[f64])], alpha: f64) -> Result<TukeyHsd, StatsError> {
    ensure_probability(alpha)?;
    let mut seen = HashSet::new();
    if let Some((label, _)) = groups.iter().find(|(label, _)| !seen.insert(*label)) {
        return Err(StatsError::DuplicateLabel {
            label: (*label).to_owned(),
        });
    }

    let values = groups.iter().map(|(_, v)| *v).collect::<Vec<_>>();
    let anova = anova::one_way(&values)?;
    let k = groups.len();
    let df = anova.df_within as f64;
    let q_crit = studentized_range::quantile(1.0 - alpha, k, df)?;

    let mut ordered = groups.to_vec();
    ordered.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut pairs = Vec::with_capacity(k * (k - 1) / 2);
    for (i, (label1, values1)) in ordered.iter().enumerate() {
        for (label2, values2) in &ordered[i + 1..] {
            let mean_diff = descriptive::mean(values2) - descriptive::mean(values1);
            let std_err = (anova.ms_within / 2.0
                * (1.0 / values1.len() as f64 + 1.0 / values2.len() as f64))
                .sqrt();
            let q = mean_diff.abs() / std_err;
            let p_adj = (1.0 - studentized_range::cdf(q, k, df)?).clamp(0.0, 1.0);
            pairs.push(TukeyPair {
                group1: (*label1).to_owned(),
                group2: (*label2).to_owned(),
                mean_diff,
                std_err,
                q,
                p_adj,
                lower: mean_diff - q_crit * std_err,
                upper: mean_diff + q_crit * std_err,
                reject: p_adj < alpha,
            });
        }
    }

    Ok(TukeyHsd {
        alpha,
        q_crit,
        df_within: anova.df_within,
        ms_within: anova.ms_within,
        pairs,
    })
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

    const INTERCRITICAL: &[f64] = &[0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    const FREQUENT: &[f64] = &[0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    const CRITICAL: &[f64] = &[1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];

    fn phase_groups() -> [(&'static str, &'static [f64]); 3] {
        [
            ("Intercritical", INTERCRITICAL),
            ("Frequent", FREQUENT),
            ("Critical", CRITICAL),
        ]
    }

    #[test]
    fn test_pairs_follow_label_order() {
        let result = tukey_hsd(&phase_groups(), 0.05).unwrap();
        let labels = result
            .pairs
            .iter()
            .map(|p| (p.group1.as_str(), p.group2.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                ("Critical", "Frequent"),
                ("Critical", "Intercritical"),
                ("Frequent", "Intercritical"),
            ]
        );
    }

    #[test]
    fn test_phase_comparisons() {
        let result = tukey_hsd(&phase_groups(), 0.05).unwrap();
        assert_close(result.q_crit, 3.649_138_885_164_822_5, 1e-4);
        assert_eq!(result.df_within, 16);

        let crit_freq = result.pair("Frequent", "Critical").unwrap();
        assert_close(crit_freq.mean_diff, -0.95, 1e-12);
        assert!(crit_freq.p_adj < 1e-5);
        assert_close(crit_freq.lower, -1.234_86, 1e-3);
        assert_close(crit_freq.upper, -0.665_14, 1e-3);
        assert!(crit_freq.reject);

        let crit_inter = result.pair("Critical", "Intercritical").unwrap();
        assert_close(crit_inter.mean_diff, -1.05, 1e-12);
        assert!(crit_inter.reject);

        let freq_inter = result.pair("Frequent", "Intercritical").unwrap();
        assert_close(freq_inter.mean_diff, -0.1, 1e-12);
        assert_close(freq_inter.p_adj, 0.664_497_504_674_473_3, 1e-6);
        assert_close(freq_inter.lower, -0.395_614_036_090_379_4, 1e-3);
        assert_close(freq_inter.upper, 0.195_614_036_090_379_42, 1e-3);
        assert!(!freq_inter.reject);
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(
            tukey_hsd(&[("x", a.as_slice()), ("x", b.as_slice())], 0.05).unwrap_err(),
            StatsError::DuplicateLabel {
                label: "x".to_owned()
            }
        );
        assert!(matches!(
            tukey_hsd(&[("x", a.as_slice()), ("y", b.as_slice())], 1.5),
            Err(StatsError::InvalidProbability { .. })
        ));
    }
}
