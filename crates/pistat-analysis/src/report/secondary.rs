use pistat_dataset::{Cohort, Phase};
use pistat_stats::{
    StatsError,
    anova::{self, OneWayAnova},
    descriptive::DescriptiveStats,
    ttest::{self, TTest},
};
use serde::Serialize;

use super::{as_groups, nrs_samples, phase_samples};
use crate::{
    AnalysisConfig, AnalysisError,
    correlation::{CorrelationMethod, CorrelationResult},
    error::StepContext as _,
    normality::NormalityPass,
};

/// Phase pairs compared with Student's t-test, in report order.
pub const STUDENT_PAIRS: [(Phase, Phase); 3] = [
    (Phase::Intercritical, Phase::Critical),
    (Phase::Intercritical, Phase::FrequentCrisis),
    (Phase::FrequentCrisis, Phase::Critical),
];

/// Fixed battery of descriptive statistics, t-tests and correlations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryReport {
    pub alpha: f64,
    pub phase_summaries: Vec<PhaseSummary>,
    pub nrs_normality: NormalityPass,
    /// ANOVA across NRS groups, run regardless of normality.
    pub nrs_anova: OneWayAnova,
    /// Spearman correlation of a group's scores with the PI levels, for
    /// groups with exactly one score per PI level.
    pub group_spearman: Vec<CorrelationResult>,
    pub phase_t_tests: Vec<PhaseTTest>,
    pub pi_vs_nrs: CorrelationResult,
    pub pi_vs_duration: CorrelationResult,
    /// Welch's t-test, intercritical vs critical.
    pub welch: PhaseTTest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummary {
    pub phase: Phase,
    #[serde(flatten)]
    pub stats: DescriptiveStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseTTest {
    pub first: Phase,
    pub second: Phase,
    #[serde(flatten)]
    pub result: TTest,
}

impl SecondaryReport {
    /// Whether the NRS ANOVA found a difference at the report's `alpha`.
    #[must_use]
    pub fn nrs_groups_differ(&self) -> bool {
        self.nrs_anova.p_value < self.alpha
    }

    pub(crate) fn run(cohort: &Cohort, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let phases = phase_samples(cohort)?;
        let phase_values = |phase: Phase| {
            phases
                .iter()
                .find(|(p, _)| *p == phase)
                .map_or(&[][..], |(_, v)| v.as_slice())
        };

        let phase_summaries = phases
            .iter()
            .map(|(phase, values)| {
                let stats = DescriptiveStats::new(values.iter().copied()).ok_or(
                    StatsError::TooFewObservations {
                        required: 1,
                        actual: 0,
                    },
                )?;
                Ok(PhaseSummary {
                    phase: *phase,
                    stats,
                })
            })
            .collect::<Result<Vec<_>, StatsError>>()
            .step("phase summary")?;

        let nrs = nrs_samples(cohort);
        let nrs_groups = as_groups(&nrs);
        let nrs_normality =
            NormalityPass::run(nrs_groups.iter().copied()).step("NRS normality check")?;
        let values = nrs_groups.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        let nrs_anova = anova::one_way(&values).step("NRS ANOVA")?;
        tracing::info!(f = nrs_anova.f, p_value = nrs_anova.p_value, "NRS ANOVA done");

        let pi_values = cohort.nrs.pi_values();
        let group_spearman = nrs_groups
            .iter()
            .filter(|(label, scores)| {
                let matches = scores.len() == pi_values.len();
                if !matches {
                    tracing::debug!(
                        group = *label,
                        n = scores.len(),
                        "group size differs from PI level count, skipping Spearman"
                    );
                }
                matches
            })
            .map(|(label, scores)| {
                CorrelationResult::compute(label, CorrelationMethod::Spearman, scores, &pi_values)
            })
            .collect::<Result<Vec<_>, _>>()
            .step("per-group Spearman correlation")?;

        let phase_t_tests = STUDENT_PAIRS
            .iter()
            .map(|&(first, second)| {
                let result = ttest::student(phase_values(first), phase_values(second))?;
                Ok(PhaseTTest {
                    first,
                    second,
                    result,
                })
            })
            .collect::<Result<Vec<_>, StatsError>>()
            .step("phase t-test")?;

        let pi_vs_nrs = CorrelationResult::compute(
            "PI and NRS",
            CorrelationMethod::Pearson,
            &pi_values,
            &cohort.nrs.means(),
        )
        .step("PI/NRS correlation")?;
        let pi_vs_duration = CorrelationResult::compute(
            "PI and Pain Duration",
            CorrelationMethod::Spearman,
            &cohort.pain_duration.pi_values(),
            &cohort.pain_duration.mean_durations(),
        )
        .step("PI/duration correlation")?;

        let welch = ttest::welch(
            phase_values(Phase::Intercritical),
            phase_values(Phase::Critical),
        )
        .step("Welch t-test")?;

        Ok(Self {
            alpha: config.alpha,
            phase_summaries,
            nrs_normality,
            nrs_anova,
            group_spearman,
            phase_t_tests,
            pi_vs_nrs,
            pi_vs_duration,
            welch: PhaseTTest {
                first: Phase::Intercritical,
                second: Phase::Critical,
                result: welch,
            },
        })
    }
}
