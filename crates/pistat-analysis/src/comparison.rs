//! Choosing and running the omnibus test for a set of groups.

use pistat_stats::{
    StatsError,
    anova::{self, OneWayAnova},
    kruskal::{self, KruskalWallis},
    tukey::{self, TukeyHsd},
};
use serde::Serialize;

use crate::AnalysisConfig;

/// The omnibus test that was run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum OmnibusTest {
    Anova(OneWayAnova),
    KruskalWallis(KruskalWallis),
}

impl OmnibusTest {
    #[must_use]
    pub fn statistic(&self) -> f64 {
        match self {
            Self::Anova(r) => r.f,
            Self::KruskalWallis(r) => r.h,
        }
    }

    #[must_use]
    pub fn p_value(&self) -> f64 {
        match self {
            Self::Anova(r) => r.p_value,
            Self::KruskalWallis(r) => r.p_value,
        }
    }

    #[must_use]
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value() < alpha
    }
}

/// Omnibus test with its optional post-hoc comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparison {
    pub omnibus: OmnibusTest,
    /// Tukey HSD, present only after a significant ANOVA.
    pub post_hoc: Option<TukeyHsd>,
}

impl GroupComparison {
    /// Runs ANOVA when `all_normal`, otherwise Kruskal-Wallis.
    pub fn select(
        groups: &[(&str, &[f64])],
        all_normal: bool,
        config: &AnalysisConfig,
    ) -> Result<Self, StatsError> {
        if all_normal {
            tracing::info!("all groups look normal, running one-way ANOVA");
            return Self::anova(groups, config);
        }

        tracing::info!("non-normal group found, running Kruskal-Wallis");
        let values = groups.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        let result = kruskal::kruskal_wallis(&values)?;
        Ok(Self {
            omnibus: OmnibusTest::KruskalWallis(result),
            post_hoc: None,
        })
    }

    /// Runs ANOVA, followed by Tukey HSD when it is significant.
    pub fn anova(groups: &[(&str, &[f64])], config: &AnalysisConfig) -> Result<Self, StatsError> {
        let values = groups.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        let omnibus = OmnibusTest::Anova(anova::one_way(&values)?);
        let post_hoc = if omnibus.is_significant(config.alpha) {
            tracing::info!(p_value = omnibus.p_value(), "ANOVA significant, running Tukey HSD");
            Some(tukey::tukey_hsd(groups, config.alpha)?)
        } else {
            tracing::info!(p_value = omnibus.p_value(), "ANOVA not significant, skipping post-hoc");
            None
        };
        Ok(Self { omnibus, post_hoc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &[f64] = &[0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    const B: &[f64] = &[0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    const C: &[f64] = &[1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];

    #[test]
    fn test_normal_groups_use_anova() {
        let config = AnalysisConfig::default();
        let result = GroupComparison::select(&[("a", A), ("b", B), ("c", C)], true, &config).unwrap();
        assert!(matches!(result.omnibus, OmnibusTest::Anova(_)));
        assert!((result.omnibus.statistic() - 56.521_303_258_145_36).abs() < 1e-9);
        assert_eq!(result.post_hoc.unwrap().pairs.len(), 3);
    }

    #[test]
    fn test_non_normal_groups_use_kruskal() {
        let config = AnalysisConfig::default();
        let result = GroupComparison::select(&[("a", A), ("b", B), ("c", C)], false, &config).unwrap();
        assert!(matches!(result.omnibus, OmnibusTest::KruskalWallis(_)));
        assert!((result.omnibus.statistic() - 12.975_330_396_475_778).abs() < 1e-9);
        assert!(result.post_hoc.is_none());
    }

    #[test]
    fn test_no_post_hoc_without_significance() {
        let config = AnalysisConfig::default();
        let result = GroupComparison::anova(&[("a", A), ("b", B)], &config).unwrap();
        assert!(!result.omnibus.is_significant(config.alpha));
        assert!(result.post_hoc.is_none());
    }
}
