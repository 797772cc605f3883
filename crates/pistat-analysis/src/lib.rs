//! The pain-index analysis pipeline.
//!
//! This crate turns a [`Cohort`](pistat_dataset::Cohort) into a report by
//! chaining the procedures of `pistat-stats`.
//!
//! # Overview
//!
//! 1. **Normality gate** ([`normality::NormalityPass`]): Shapiro-Wilk on each
//!    group, skipping groups with fewer than three observations
//! 2. **Group comparison** ([`comparison::GroupComparison`]): one-way ANOVA when
//!    every group looks normal, Kruskal-Wallis otherwise, and Tukey HSD after a
//!    significant ANOVA
//! 3. **Correlation** ([`correlation::CorrelationResult`]): Pearson or Spearman
//!    between PI levels and per-group outcomes
//! 4. **Reports** ([`report::run`]): the primary and secondary variants
//!    assembled from the steps above
//!
//! All steps are synchronous pure functions. Decisions are logged through
//! `tracing`; nothing is printed.
//!
//! # Examples
//!
//! ```
//! use pistat_analysis::{
//!     AnalysisConfig,
//!     comparison::OmnibusTest,
//!     report::{self, Report, ReportVariant},
//! };
//! use pistat_dataset::Cohort;
//!
//! let config = AnalysisConfig::default();
//! let Report::Primary(report) = report::run(&Cohort::builtin(), ReportVariant::Primary, &config)?
//! else {
//!     unreachable!()
//! };
//!
//! // every phase passes Shapiro-Wilk, so ANOVA is chosen
//! assert!(matches!(report.phase_comparison.omnibus, OmnibusTest::Anova(_)));
//! assert!(report.phase_comparison.post_hoc.is_some());
//! # Ok::<(), pistat_analysis::AnalysisError>(())
//! ```

pub use self::{
    config::{AnalysisConfig, DEFAULT_ALPHA},
    error::AnalysisError,
};

pub mod comparison;
mod config;
pub mod correlation;
mod error;
pub mod normality;
pub mod report;
