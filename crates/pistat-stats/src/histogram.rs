use std::ops::Range;

use serde::Serialize;

/// A histogram representation of a sample's distribution.
///
/// The range `[min, max]` of the data is split into equal-width bins. Every
/// bin is half-open except the last, which also holds the maximum.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// The bins, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// A sample concentrated at a single value gets a unit-wide range
    /// centered on that value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pistat_stats::histogram::Histogram;
    /// let histogram = Histogram::new([0.4, 0.5, 0.6, 0.7, 0.8, 0.9], 6);
    /// assert_eq!(histogram.bins.len(), 6);
    /// assert!(histogram.bins.iter().all(|bin| bin.count == 1));
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max - min < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }
        let bin_width = (max - min) / num_bins as f64;

        // Recompute edges from the index to avoid accumulating rounding errors
        let edge = |idx: usize| {
            if idx == num_bins {
                max
            } else {
                min + idx as f64 * bin_width
            }
        };
        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..edge(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();

        for val in values {
            let idx = ((val - min) / bin_width).floor().max(0.0) as usize;
            bins[idx.min(num_bins - 1)].count += 1;
        }

        Self { bins }
    }

    /// Width shared by every bin; `0.0` for an empty histogram.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bins
            .first()
            .map_or(0.0, |bin| bin.range.end - bin.range.start)
    }

    /// Largest bin count; `0` for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(Histogram::new(std::iter::empty(), 5).bins.is_empty());
        assert!(Histogram::new([1.0], 0).bins.is_empty());
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let histogram = Histogram::new([1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0], 7);
        let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, vec![1; 7]);
        assert_eq!(histogram.bins.last().unwrap().range.end, 2.0);
    }

    #[test]
    fn test_constant_sample() {
        let histogram = Histogram::new([3.0, 3.0, 3.0], 2);
        assert_eq!(histogram.bins.len(), 2);
        assert_eq!(histogram.max_count(), 3);
        assert!((histogram.bin_width() - 0.5).abs() < 1e-12);
    }
}
