//! Statistical procedures for the pistat pain-index analyses.
//!
//! This crate provides the building blocks the analysis pipeline is made of:
//!
//! - **Descriptive statistics**: mean, median, sample variance, quartiles and box-plot notches
//! - **Normality**: the Shapiro-Wilk W test
//! - **Group comparison**: one-way ANOVA, Kruskal-Wallis and Tukey's HSD
//! - **Association**: Pearson and Spearman correlation, Student and Welch t-tests
//! - **Density**: equal-width histograms and Gaussian kernel density estimates
//!
//! The hypothesis tests delegate the arithmetic to the `normality` and
//! `anofox-statistics` crates. Every procedure validates its input first and
//! returns a [`StatsError`] instead of producing NaN.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`percentiles`]: Linear-interpolation percentiles and box-plot quartiles
//! - [`histogram`]: Equal-width histograms
//! - [`kde`]: Gaussian kernel density estimation
//! - [`summary`]: Descriptive statistics and quartiles of one group
//! - [`normality`]: Shapiro-Wilk normality test
//! - [`anova`]: One-way analysis of variance
//! - [`kruskal`]: Kruskal-Wallis H test
//! - [`studentized_range`]: Studentized range distribution
//! - [`tukey`]: Tukey's HSD post-hoc comparisons
//! - [`correlation`]: Pearson and Spearman correlation
//! - [`ttest`]: Two-sample t-tests
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use pistat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Choosing between ANOVA and Kruskal-Wallis
//!
//! ```
//! use pistat_stats::{anova, kruskal, normality};
//!
//! let a = [0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
//! let b = [1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];
//! let groups = [a.as_slice(), b.as_slice()];
//!
//! let all_normal = groups
//!     .iter()
//!     .all(|g| normality::shapiro_wilk(g).unwrap().p_value > 0.05);
//! let p_value = if all_normal {
//!     anova::one_way(&groups).unwrap().p_value
//! } else {
//!     kruskal::kruskal_wallis(&groups).unwrap().p_value
//! };
//! assert!(p_value < 0.05);
//! ```
//!
//! ## Testing a correlation
//!
//! ```
//! use pistat_stats::correlation::pearson;
//!
//! let pi = [1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0];
//! let duration = [8.5, 9.0, 16.0, 15.5, 18.0, 36.0, 52.0];
//! let result = pearson(&pi, &duration).unwrap();
//! assert!(result.coefficient > 0.8);
//! ```

pub use self::error::StatsError;

pub mod anova;
pub mod correlation;
pub mod descriptive;
mod error;
pub mod histogram;
pub mod kde;
pub mod kruskal;
pub mod normality;
pub mod percentiles;
pub mod studentized_range;
pub mod summary;
pub mod ttest;
pub mod tukey;
