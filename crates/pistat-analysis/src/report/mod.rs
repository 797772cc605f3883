//! Report variants: the full analysis of a cohort in one call.
//!
//! Two variants exist side by side. They overlap but differ in which tests
//! they run and when, and neither is considered canonical:
//!
//! - [`ReportVariant::Primary`] gates every comparison on normality and
//!   follows a significant ANOVA with Tukey HSD
//! - [`ReportVariant::Secondary`] runs a fixed battery: descriptive
//!   statistics, an unconditional NRS ANOVA, t-tests between phases and
//!   Spearman correlations
//!
//! Both are pure functions of the cohort and the configuration; running
//! them twice yields identical reports.

use pistat_dataset::{Cohort, Phase};
use serde::Serialize;

pub use self::{primary::*, secondary::*};
use crate::{AnalysisConfig, AnalysisError};

mod primary;
mod secondary;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum ReportVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Report {
    Primary(PrimaryReport),
    Secondary(SecondaryReport),
}

/// Validates the cohort and runs one report variant over it.
///
/// # Examples
///
/// ```
/// use pistat_analysis::{AnalysisConfig, report::{self, Report, ReportVariant}};
/// use pistat_dataset::Cohort;
///
/// let report = report::run(&Cohort::builtin(), ReportVariant::Primary, &AnalysisConfig::default())
///     .unwrap();
/// assert!(matches!(report, Report::Primary(_)));
/// ```
pub fn run(
    cohort: &Cohort,
    variant: ReportVariant,
    config: &AnalysisConfig,
) -> Result<Report, AnalysisError> {
    if !(config.alpha > 0.0 && config.alpha < 1.0) {
        return Err(AnalysisError::InvalidAlpha {
            alpha: config.alpha,
        });
    }
    cohort.validate()?;

    tracing::info!(%variant, alpha = config.alpha, "running report");
    let report = match variant {
        ReportVariant::Primary => Report::Primary(PrimaryReport::run(cohort, config)?),
        ReportVariant::Secondary => Report::Secondary(SecondaryReport::run(cohort, config)?),
    };
    Ok(report)
}

/// PI values of every phase, in clinical order.
fn phase_samples(cohort: &Cohort) -> Result<Vec<(Phase, Vec<f64>)>, AnalysisError> {
    Phase::ALL
        .iter()
        .map(|&phase| Ok((phase, cohort.phase(phase)?.pi_values())))
        .collect()
}

/// NRS scores of every group, in table order.
fn nrs_samples(cohort: &Cohort) -> Vec<(&str, Vec<f64>)> {
    cohort
        .nrs
        .groups
        .iter()
        .map(|g| (g.label.as_str(), g.values()))
        .collect()
}

/// Borrows owned samples as the `(label, values)` pairs the tests take.
fn as_groups<L>(samples: &[(L, Vec<f64>)]) -> Vec<(&str, &[f64])>
where
    L: AsRef<str>,
{
    samples
        .iter()
        .map(|(label, values)| (label.as_ref(), values.as_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("primary".parse::<ReportVariant>().unwrap(), ReportVariant::Primary);
        assert_eq!("Secondary".parse::<ReportVariant>().unwrap(), ReportVariant::Secondary);
        assert!("tertiary".parse::<ReportVariant>().is_err());
        assert_eq!(ReportVariant::default(), ReportVariant::Primary);
    }

    #[test]
    fn test_rejects_invalid_alpha() {
        let cohort = Cohort::builtin();
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            let config = AnalysisConfig { alpha };
            assert!(matches!(
                run(&cohort, ReportVariant::Primary, &config),
                Err(AnalysisError::InvalidAlpha { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_cohort() {
        let mut cohort = Cohort::builtin();
        cohort.phases.pop();
        assert!(matches!(
            run(&cohort, ReportVariant::Secondary, &AnalysisConfig::default()),
            Err(AnalysisError::Dataset(_))
        ));
    }
}
