//! Per-group summary combining descriptive statistics and box-plot quartiles.

use serde::Serialize;

use crate::{descriptive::DescriptiveStats, percentiles::Quartiles};

/// Everything needed to describe one group: location, spread and the box
/// drawn for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    #[serde(flatten)]
    pub stats: DescriptiveStats,
    pub quartiles: Quartiles,
}

impl GroupSummary {
    /// Summarizes unsorted values, sorting them once for both parts.
    ///
    /// Returns `None` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use pistat_stats::summary::GroupSummary;
    ///
    /// let summary = GroupSummary::new([45.0, 42.0, 47.0, 48.0, 45.0]).unwrap();
    /// assert_eq!(summary.stats.count, 5);
    /// assert_eq!(summary.stats.median, summary.quartiles.median);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            stats: DescriptiveStats::from_sorted(&sorted)?,
            quartiles: Quartiles::from_sorted(&sorted)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarizes_nrs_group() {
        let summary = GroupSummary::new([70.0, 68.0, 66.0, 73.0, 69.0, 72.0, 71.0, 67.0, 70.0, 72.0])
            .unwrap();
        assert_eq!(summary.stats.count, 10);
        assert_eq!(summary.stats.min, 66.0);
        assert_eq!(summary.stats.max, 73.0);
        assert!((summary.stats.mean - 69.8).abs() < 1e-12);
        assert_eq!(summary.quartiles.median, 70.0);
        assert!(summary.quartiles.q1 <= summary.stats.median);
        assert!(summary.quartiles.outliers.is_empty());
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(GroupSummary::new(std::iter::empty::<f64>()), None);
    }

    #[test]
    fn test_serializes_flat_stats() {
        let summary = GroupSummary::new([1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["quartiles"]["median"], 2.0);
    }
}
