//! Plot command
//!
//! Renders the descriptive charts of the cohort as SVG files. The charts are
//! presentational only; no report value depends on them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Args;
use pistat_dataset::Cohort;

use crate::util;

mod chart;

type ChartFn = fn(&Path, &Cohort) -> anyhow::Result<()>;

/// File name and renderer of every chart, in drawing order.
const CHARTS: [(&str, ChartFn); 5] = [
    ("pi_distribution.svg", chart::pi_distribution),
    ("patients_by_pi.svg", chart::patients_by_pi),
    ("pi_vs_nrs.svg", chart::pi_vs_nrs),
    ("nrs_boxplot.svg", chart::nrs_boxplot),
    ("pi_vs_duration.svg", chart::pi_vs_duration),
];

#[derive(Debug, Clone, Args)]
pub(crate) struct PlotArg {
    /// Dataset JSON file; the built-in cohort is used when omitted
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Directory the SVG files are written to
    #[arg(long, default_value = "plots")]
    output_dir: PathBuf,
}

pub(crate) fn run(arg: &PlotArg) -> anyhow::Result<()> {
    let cohort = util::load_cohort(arg.dataset.as_deref())?;
    cohort.validate()?;
    let written = render_all(&cohort, &arg.output_dir)?;
    eprintln!(
        "Wrote {} charts to {}",
        written.len(),
        arg.output_dir.display()
    );
    Ok(())
}

fn render_all(cohort: &Cohort, output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut written = Vec::with_capacity(CHARTS.len());
    for (file_name, render) in CHARTS {
        let path = output_dir.join(file_name);
        render(&path, cohort)
            .with_context(|| format!("Failed to render chart: {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_charts() {
        let dir = std::env::temp_dir().join(format!("pistat-plot-test-{}", std::process::id()));
        let written = render_all(&Cohort::builtin(), &dir).unwrap();
        assert_eq!(written.len(), CHARTS.len());

        let titles = [
            "Distribution of PI in Different Phases",
            "Distribution of PI in Different Phases",
            "Correlation between PI and Pain Intensity (NRS)",
            "Distribution of NRS Scores by PI Group",
            "Correlation between PI and Pain Duration",
        ];
        for (path, title) in written.iter().zip(titles) {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("<svg"), "{} is not an SVG", path.display());
            assert!(svg.contains(title), "{} lacks its title", path.display());
        }
        let duration = fs::read_to_string(dir.join("pi_vs_duration.svg")).unwrap();
        assert!(duration.contains("Mean Pain Duration"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
