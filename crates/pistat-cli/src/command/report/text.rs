//! Plain-text rendering of reports
//!
//! Every statistic is printed with three decimal places.

use std::io::{self, Write};

use pistat_analysis::{
    comparison::{GroupComparison, OmnibusTest},
    correlation::CorrelationResult,
    normality::{MIN_NORMALITY_SAMPLES, NormalityCheck, NormalityPass},
    report::{NrsFollowUp, PhaseTTest, PrimaryReport, Report, SecondaryReport},
};
use pistat_stats::tukey::TukeyHsd;

const TUKEY_TABLE_WIDTH: usize = 81;
const SUMMARY_TABLE_WIDTH: usize = 74;

pub(super) fn write_report<W>(w: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    match report {
        Report::Primary(report) => write_primary(w, report),
        Report::Secondary(report) => write_secondary(w, report),
    }
}

fn write_primary<W>(w: &mut W, report: &PrimaryReport) -> io::Result<()>
where
    W: Write,
{
    let alpha = report.alpha;

    for check in &report.phase_normality.checks {
        write_shapiro_line(w, check)?;
    }
    if report.phase_normality.all_normal(alpha) {
        writeln!(w, "All phases look normal (p > {alpha}), running one-way ANOVA")?;
    } else {
        writeln!(
            w,
            "At least one phase is not normal (p <= {alpha}), running Kruskal-Wallis"
        )?;
    }
    write_comparison(w, &report.phase_comparison, alpha)?;
    writeln!(w)?;

    writeln!(w, "Shapiro-Wilk normality test for NRS scores:")?;
    write_normality_pass(w, &report.nrs_normality, alpha)?;
    match &report.nrs_follow_up {
        None => {}
        Some(NrsFollowUp::Parametric { pooled, comparison }) => {
            write_shapiro_line(w, pooled)?;
            writeln!(w, "Pooled NRS scores look normal, comparing NRS groups with ANOVA")?;
            write_comparison(w, comparison, alpha)?;
        }
        Some(NrsFollowUp::NonParametric { pooled }) => {
            write_shapiro_line(w, pooled)?;
            writeln!(
                w,
                "NRS scores are not normal. Consider a non-parametric post-hoc test."
            )?;
        }
    }
    writeln!(w)?;

    write_correlation(w, &report.pi_vs_nrs)?;
    write_correlation(w, &report.pi_vs_duration)?;
    Ok(())
}

fn write_secondary<W>(w: &mut W, report: &SecondaryReport) -> io::Result<()>
where
    W: Write,
{
    let alpha = report.alpha;

    writeln!(w, "Descriptive statistics of PI by phase:")?;
    writeln!(
        w,
        "  {:<24} {:>4} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Phase", "n", "mean", "std", "median", "min", "max"
    )?;
    writeln!(w, "  {}", "-".repeat(SUMMARY_TABLE_WIDTH))?;
    for summary in &report.phase_summaries {
        let stats = &summary.stats;
        writeln!(
            w,
            "  {:<24} {:>4} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            summary.phase.to_string(),
            stats.count,
            stats.mean,
            stats.std_dev,
            stats.median,
            stats.min,
            stats.max,
        )?;
    }
    writeln!(w)?;

    writeln!(w, "Shapiro-Wilk normality test for NRS scores:")?;
    write_normality_pass(w, &report.nrs_normality, alpha)?;

    let anova = &report.nrs_anova;
    writeln!(
        w,
        "ANOVA across NRS groups: F = {:.3}, p-value = {:.3}",
        anova.f, anova.p_value
    )?;
    if report.nrs_groups_differ() {
        writeln!(w, " -> Significant difference between NRS groups (p < {alpha})")?;
    } else {
        writeln!(w, " -> No significant difference between NRS groups (p >= {alpha})")?;
    }
    writeln!(w)?;

    for correlation in &report.group_spearman {
        writeln!(
            w,
            "Spearman correlation for {}: {:.3}, p-value: {:.3}",
            correlation.label, correlation.result.coefficient, correlation.result.p_value
        )?;
    }
    for test in &report.phase_t_tests {
        write_t_test(w, "T-test", test)?;
    }
    writeln!(w)?;

    write_correlation(w, &report.pi_vs_nrs)?;
    write_correlation(w, &report.pi_vs_duration)?;
    writeln!(w)?;

    write_t_test(w, "Welch t-test", &report.welch)?;
    writeln!(w, "  degrees of freedom = {:.3}", report.welch.result.df)?;
    Ok(())
}

fn write_shapiro_line<W>(w: &mut W, check: &NormalityCheck) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "Shapiro-Wilk normality test for {}: p-value = {:.3}",
        check.label, check.p_value
    )
}

fn write_normality_pass<W>(w: &mut W, pass: &NormalityPass, alpha: f64) -> io::Result<()>
where
    W: Write,
{
    for check in &pass.checks {
        writeln!(
            w,
            "{}: W = {:.3}, p-value = {:.3}",
            check.label, check.w, check.p_value
        )?;
        if check.is_normal(alpha) {
            writeln!(w, " -> {} looks normally distributed (p > {alpha})", check.label)?;
        } else {
            writeln!(w, " -> {} is not normally distributed (p <= {alpha})", check.label)?;
        }
    }
    for label in &pass.excluded {
        writeln!(
            w,
            "{label}: skipped, fewer than {MIN_NORMALITY_SAMPLES} scores"
        )?;
    }
    Ok(())
}

fn write_comparison<W>(w: &mut W, comparison: &GroupComparison, alpha: f64) -> io::Result<()>
where
    W: Write,
{
    match &comparison.omnibus {
        OmnibusTest::Anova(anova) => {
            writeln!(
                w,
                "ANOVA test: F = {:.3}, p-value = {:.3}",
                anova.f, anova.p_value
            )?;
        }
        OmnibusTest::KruskalWallis(kruskal) => {
            writeln!(
                w,
                "Kruskal-Wallis test: H = {:.3}, p-value = {:.3}",
                kruskal.h, kruskal.p_value
            )?;
        }
    }

    if comparison.omnibus.is_significant(alpha) {
        writeln!(w, " -> Significant difference between groups (p < {alpha})")?;
    } else {
        writeln!(w, " -> No significant difference between groups (p >= {alpha})")?;
    }
    if let Some(tukey) = &comparison.post_hoc {
        writeln!(w)?;
        write_tukey_table(w, tukey)?;
    }
    Ok(())
}

fn write_tukey_table<W>(w: &mut W, tukey: &TukeyHsd) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "Multiple comparison of means - Tukey HSD, FWER = {}",
        tukey.alpha
    )?;
    writeln!(
        w,
        "  {:<18} {:<18} {:>9} {:>7} {:>8} {:>8} {:>7}",
        "group1", "group2", "meandiff", "p-adj", "lower", "upper", "reject"
    )?;
    writeln!(w, "  {}", "-".repeat(TUKEY_TABLE_WIDTH))?;
    for pair in &tukey.pairs {
        writeln!(
            w,
            "  {:<18} {:<18} {:>9.3} {:>7.3} {:>8.3} {:>8.3} {:>7}",
            pair.group1, pair.group2, pair.mean_diff, pair.p_adj, pair.lower, pair.upper, pair.reject,
        )?;
    }
    Ok(())
}

fn write_correlation<W>(w: &mut W, correlation: &CorrelationResult) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "{} correlation between {}: {:.3}, p-value: {:.3}",
        correlation.method,
        correlation.label,
        correlation.result.coefficient,
        correlation.result.p_value
    )
}

fn write_t_test<W>(w: &mut W, name: &str, test: &PhaseTTest) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "{name}: {} vs {}: t = {:.3}, p-value = {:.3}",
        test.first, test.second, test.result.t, test.result.p_value
    )
}
