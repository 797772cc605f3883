use serde::Serialize;

/// Box-plot quartiles of a sample.
///
/// Quartiles use linear interpolation between order statistics. Whiskers
/// reach the most extreme observations within 1.5 IQR of the box, and the
/// notch spans `median ± 1.57 · IQR / √n`.
///
/// # Examples
///
/// ```
/// use pistat_stats::percentiles::Quartiles;
///
/// let quartiles = Quartiles::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(quartiles.q1, 2.0);
/// assert_eq!(quartiles.median, 3.0);
/// assert_eq!(quartiles.q3, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest observation not below `q1 - 1.5 · IQR`.
    pub lower_whisker: f64,
    /// Highest observation not above `q3 + 1.5 · IQR`.
    pub upper_whisker: f64,
    pub notch_low: f64,
    pub notch_high: f64,
    /// Observations beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl Quartiles {
    /// Computes quartiles from unsorted values; `None` for an empty sample.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes quartiles from pre-sorted values; `None` for an empty sample.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return None;
        }

        let q1 = compute_percentile(sorted_values, 25.0);
        let median = compute_percentile(sorted_values, 50.0);
        let q3 = compute_percentile(sorted_values, 75.0);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted_values
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted_values
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < lower_whisker || v > upper_whisker)
            .collect();

        let notch_half_width = 1.57 * iqr / (sorted_values.len() as f64).sqrt();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            notch_low: median - notch_half_width,
            notch_high: median + notch_half_width,
            outliers,
        })
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes a single percentile from sorted data by linear interpolation.
///
/// The k-th percentile sits at fractional position `(n - 1) · k / 100`.
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use pistat_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let last = sorted_values.len() - 1;
    let position = (last as f64 * percentile.clamp(0.0, 100.0)) / 100.0;
    let lower = (position.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_endpoints() {
        let values = [42.0, 43.0, 45.0, 50.0];
        assert_eq!(compute_percentile(&values, 0.0), 42.0);
        assert_eq!(compute_percentile(&values, 100.0), 50.0);
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_nrs_group_quartiles() {
        // Group 1 (PI 1.4), sorted: 42 42 43 43 45 45 47 48 49 50
        let quartiles = Quartiles::new([45.0, 42.0, 47.0, 48.0, 45.0, 43.0, 42.0, 49.0, 50.0, 43.0])
            .unwrap();
        assert!((quartiles.q1 - 43.0).abs() < 1e-12);
        assert!((quartiles.median - 45.0).abs() < 1e-12);
        assert!((quartiles.q3 - 47.75).abs() < 1e-12);
        assert_eq!(quartiles.lower_whisker, 42.0);
        assert_eq!(quartiles.upper_whisker, 50.0);
        assert!(quartiles.outliers.is_empty());
        let half = 1.57 * 4.75 / 10f64.sqrt();
        assert!((quartiles.notch_high - (45.0 + half)).abs() < 1e-12);
    }

    #[test]
    fn test_outliers_beyond_whiskers() {
        let quartiles = Quartiles::new([1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_eq!(quartiles.upper_whisker, 4.0);
        assert_eq!(quartiles.outliers, vec![100.0]);
    }
}
