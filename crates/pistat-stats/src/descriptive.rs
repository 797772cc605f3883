use serde::Serialize;

/// Descriptive statistics summarizing a sample.
///
/// Dispersion uses the sample (n - 1) denominator, the convention of the
/// clinical tables this crate is fed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median (mean of the two middle values for even counts).
    pub median: f64,
    /// The sample variance; `0.0` for a single observation.
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use pistat_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([0.5, 0.4, 0.6]).unwrap();
    /// assert_eq!(stats.min, 0.4);
    /// assert_eq!(stats.max, 0.6);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let mean = mean(sorted_values);
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };
        let variance = sample_variance(sorted_values);

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Arithmetic mean; `NaN` for an empty slice.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with the n - 1 denominator; `0.0` below two observations.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    sum_sq / (values.len() - 1) as f64
}

/// Sum of squared deviations from the mean.
#[must_use]
pub fn sum_of_squares(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    }

    #[test]
    fn test_even_count_median() {
        let stats = DescriptiveStats::new([0.9, 0.4, 0.6, 0.5, 0.8, 0.7]).unwrap();
        assert!((stats.median - 0.65).abs() < 1e-12);
        assert!((stats.mean - 0.65).abs() < 1e-12);
        assert_eq!(stats.count, 6);
    }

    #[test]
    fn test_sample_std_dev() {
        // critical-phase PI column
        let stats = DescriptiveStats::new([1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0]).unwrap();
        assert!((stats.mean - 1.7).abs() < 1e-12);
        assert!((stats.std_dev - 0.216_024_689_946_928_67).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_variance() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.median, 42.0);
    }
}
