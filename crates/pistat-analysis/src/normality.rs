//! Normality gate in front of the group comparisons.
//!
//! Each sample is screened with Shapiro-Wilk. A p-value above `alpha` counts
//! as "normal enough" for parametric tests. No multiple-comparison
//! correction is applied across groups.

use pistat_stats::{StatsError, normality};
use serde::Serialize;

/// Groups smaller than this are left out of a normality pass.
pub const MIN_NORMALITY_SAMPLES: usize = normality::MIN_SAMPLES;

/// Shapiro-Wilk outcome for one labelled sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalityCheck {
    pub label: String,
    pub n: usize,
    pub w: f64,
    pub p_value: f64,
}

impl NormalityCheck {
    /// Tests a single sample.
    pub fn run(label: &str, values: &[f64]) -> Result<Self, StatsError> {
        let result = normality::shapiro_wilk(values)?;
        tracing::debug!(
            label,
            n = values.len(),
            w = result.w,
            p_value = result.p_value,
            "normality checked"
        );
        Ok(Self {
            label: label.to_owned(),
            n: values.len(),
            w: result.w,
            p_value: result.p_value,
        })
    }

    #[must_use]
    pub fn is_normal(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Normality checks over a list of groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalityPass {
    pub checks: Vec<NormalityCheck>,
    /// Labels of groups too small to be tested.
    pub excluded: Vec<String>,
}

impl NormalityPass {
    /// Tests every group with at least [`MIN_NORMALITY_SAMPLES`] values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pistat_analysis::normality::NormalityPass;
    ///
    /// let groups = [
    ///     ("a", [1.0, 2.0, 4.0].as_slice()),
    ///     ("b", [5.0, 6.0].as_slice()),
    /// ];
    /// let pass = NormalityPass::run(groups).unwrap();
    /// assert_eq!(pass.checks.len(), 1);
    /// assert_eq!(pass.excluded, ["b"]);
    /// ```
    pub fn run<'a, I>(groups: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (&'a str, &'a [f64])>,
    {
        let mut pass = Self::default();
        for (label, values) in groups {
            if values.len() < MIN_NORMALITY_SAMPLES {
                tracing::debug!(
                    label,
                    n = values.len(),
                    "too few observations for a normality check"
                );
                pass.excluded.push(label.to_owned());
                continue;
            }
            pass.checks.push(NormalityCheck::run(label, values)?);
        }
        Ok(pass)
    }

    /// Tests every group, with no size filter.
    ///
    /// Used where every group must carry a p-value before a parametric test
    /// may run; a group too small for Shapiro-Wilk is an error here.
    ///
    /// # Examples
    ///
    /// ```
    /// use pistat_analysis::normality::NormalityPass;
    ///
    /// let groups = [
    ///     ("a", [1.0, 2.0, 4.0].as_slice()),
    ///     ("b", [5.0, 6.0].as_slice()),
    /// ];
    /// assert!(NormalityPass::run_all(groups).is_err());
    /// ```
    pub fn run_all<'a, I>(groups: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (&'a str, &'a [f64])>,
    {
        let checks = groups
            .into_iter()
            .map(|(label, values)| NormalityCheck::run(label, values))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            checks,
            excluded: vec![],
        })
    }

    /// Whether every tested group looks normal at `alpha`.
    #[must_use]
    pub fn all_normal(&self, alpha: f64) -> bool {
        self.checks.iter().all(|c| c.is_normal(alpha))
    }

    pub fn non_normal(&self, alpha: f64) -> impl Iterator<Item = &NormalityCheck> {
        self.checks.iter().filter(move |c| !c.is_normal(alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_observations_are_excluded() {
        let groups = [
            ("pair", [1.0, 2.0].as_slice()),
            ("triple", [1.0, 2.0, 3.5].as_slice()),
        ];
        let pass = NormalityPass::run(groups).unwrap();
        assert_eq!(pass.excluded, ["pair"]);
        assert_eq!(pass.checks.len(), 1);
        assert_eq!(pass.checks[0].label, "triple");
        assert_eq!(pass.checks[0].n, 3);
    }

    #[test]
    fn test_verdicts() {
        let normal = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
        let skewed = [
            148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
        ];
        let pass = NormalityPass::run([
            ("normal", normal.as_slice()),
            ("skewed", skewed.as_slice()),
        ])
        .unwrap();
        assert!(!pass.all_normal(0.05));
        assert!(pass.checks[0].is_normal(0.05));
        let rejected = pass.non_normal(0.05).map(|c| c.label.as_str()).collect::<Vec<_>>();
        assert_eq!(rejected, ["skewed"]);
    }

    #[test]
    fn test_run_all_rejects_small_groups() {
        let groups = [
            ("pair", [1.0, 2.0].as_slice()),
            ("triple", [1.0, 2.0, 3.5].as_slice()),
        ];
        assert_eq!(
            NormalityPass::run_all(groups).unwrap_err(),
            StatsError::TooFewObservations {
                required: 3,
                actual: 2
            }
        );

        let pass = NormalityPass::run_all([("triple", [1.0, 2.0, 3.5].as_slice())]).unwrap();
        assert_eq!(pass.checks.len(), 1);
        assert!(pass.excluded.is_empty());
    }

    #[test]
    fn test_empty_pass_is_vacuously_normal() {
        let pass = NormalityPass::run(Vec::<(&str, &[f64])>::new()).unwrap();
        assert!(pass.all_normal(0.05));
    }
}
