//! Report command
//!
//! Runs one report variant over the cohort and prints it as text or JSON.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use pistat_analysis::{
    AnalysisConfig, DEFAULT_ALPHA,
    report::{self, ReportVariant},
};

use crate::util::{self, Output};

mod text;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Report variant to run (primary or secondary)
    #[arg(long, default_value = "primary")]
    variant: ReportVariant,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Dataset JSON file; the built-in cohort is used when omitted
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Significance level for every test
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            variant: ReportVariant::default(),
            format: OutputFormat::default(),
            dataset: None,
            alpha: DEFAULT_ALPHA,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let cohort = util::load_cohort(arg.dataset.as_deref())?;
    let config = AnalysisConfig { alpha: arg.alpha };
    let report = report::run(&cohort, arg.variant, &config)?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        OutputFormat::Text => {
            text::write_report(&mut output, &report).with_context(|| {
                format!("Failed to write report to {}", output.display_path())
            })?;
            output.finish()?;
        }
        OutputFormat::Json => output.write_json(&report)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[clap(flatten)]
        arg: ReportArg,
    }

    #[test]
    fn test_parse_defaults() {
        let cli = TestCli::parse_from(["pistat"]);
        assert_eq!(cli.arg.variant, ReportVariant::Primary);
        assert_eq!(cli.arg.format, OutputFormat::Text);
        assert!((cli.arg.alpha - DEFAULT_ALPHA).abs() < f64::EPSILON);
        assert!(cli.arg.dataset.is_none());
    }

    #[test]
    fn test_parse_options() {
        let cli = TestCli::parse_from([
            "pistat",
            "--variant",
            "secondary",
            "--format",
            "json",
            "--alpha",
            "0.01",
        ]);
        assert_eq!(cli.arg.variant, ReportVariant::Secondary);
        assert_eq!(cli.arg.format, OutputFormat::Json);
        assert!((cli.arg.alpha - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(TestCli::try_parse_from(["pistat", "--format", "yaml"]).is_err());
    }
}
