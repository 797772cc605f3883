use pistat_dataset::Cohort;
use serde::Serialize;

use super::{as_groups, nrs_samples, phase_samples};
use crate::{
    AnalysisConfig, AnalysisError,
    comparison::GroupComparison,
    correlation::{CorrelationMethod, CorrelationResult},
    error::StepContext as _,
    normality::{NormalityCheck, NormalityPass},
};

/// Label of the pooled NRS normality check.
pub const POOLED_NRS_LABEL: &str = "NRS";

/// Normality-gated comparison of phases and NRS groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryReport {
    pub alpha: f64,
    pub phase_normality: NormalityPass,
    /// ANOVA (with Tukey HSD when significant) or Kruskal-Wallis across phases.
    pub phase_comparison: GroupComparison,
    pub nrs_normality: NormalityPass,
    /// Present when at least one NRS group failed the normality check.
    pub nrs_follow_up: Option<NrsFollowUp>,
    pub pi_vs_nrs: CorrelationResult,
    pub pi_vs_duration: CorrelationResult,
}

/// What happens after a non-normal NRS group is found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NrsFollowUp {
    /// Pooled scores look normal: the groups are compared with ANOVA.
    Parametric {
        pooled: NormalityCheck,
        comparison: GroupComparison,
    },
    /// Pooled scores are not normal either; a non-parametric post-hoc test
    /// is advised but not run.
    NonParametric { pooled: NormalityCheck },
}

impl PrimaryReport {
    pub(crate) fn run(cohort: &Cohort, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let alpha = config.alpha;

        let phases = phase_samples(cohort)?;
        let phase_names = phases
            .iter()
            .map(|(phase, _)| phase.to_string())
            .collect::<Vec<_>>();
        // every phase must be tested before ANOVA can be chosen
        let phase_normality = NormalityPass::run_all(
            phase_names
                .iter()
                .map(String::as_str)
                .zip(phases.iter().map(|(_, values)| values.as_slice())),
        )
        .step("phase normality check")?;

        let short_labeled = phases
            .iter()
            .map(|(phase, values)| (phase.short_label(), values.as_slice()))
            .collect::<Vec<_>>();
        let phase_comparison =
            GroupComparison::select(&short_labeled, phase_normality.all_normal(alpha), config)
                .step("phase comparison")?;

        let nrs = nrs_samples(cohort);
        let nrs_groups = as_groups(&nrs);
        let nrs_normality =
            NormalityPass::run(nrs_groups.iter().copied()).step("NRS normality check")?;
        let nrs_follow_up = if let Some(first) = nrs_normality.non_normal(alpha).next() {
            tracing::info!(
                group = first.label.as_str(),
                "non-normal NRS group, testing pooled scores"
            );
            let pooled = NormalityCheck::run(POOLED_NRS_LABEL, &cohort.nrs.pooled_values())
                .step("pooled NRS normality check")?;
            if pooled.is_normal(alpha) {
                let comparison =
                    GroupComparison::anova(&nrs_groups, config).step("NRS comparison")?;
                Some(NrsFollowUp::Parametric { pooled, comparison })
            } else {
                Some(NrsFollowUp::NonParametric { pooled })
            }
        } else {
            tracing::info!("all NRS groups look normal");
            None
        };

        let pi_vs_nrs = CorrelationResult::compute(
            "PI and NRS",
            CorrelationMethod::Pearson,
            &cohort.nrs.pi_values(),
            &cohort.nrs.means(),
        )
        .step("PI/NRS correlation")?;
        let pi_vs_duration = CorrelationResult::compute(
            "PI and Pain Duration",
            CorrelationMethod::Pearson,
            &cohort.pain_duration.pi_values(),
            &cohort.pain_duration.mean_durations(),
        )
        .step("PI/duration correlation")?;

        Ok(Self {
            alpha,
            phase_normality,
            phase_comparison,
            nrs_normality,
            nrs_follow_up,
            pi_vs_nrs,
            pi_vs_duration,
        })
    }
}
