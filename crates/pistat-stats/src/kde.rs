//! Gaussian kernel density estimation.

use std::f64::consts::PI;

use crate::{
    StatsError,
    descriptive,
    error::{ensure_finite, ensure_min_len},
};

/// Gaussian kernel density estimate with Scott's rule bandwidth.
///
/// The bandwidth is `n^(-1/5)` times the sample standard deviation.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits the estimator to at least two non-constant observations.
    ///
    /// # Examples
    ///
    /// ```
    /// use pistat_stats::kde::GaussianKde;
    ///
    /// let kde = GaussianKde::new(&[0.4, 0.5, 0.6, 0.7, 0.8, 0.9]).unwrap();
    /// assert!(kde.density(0.65) > kde.density(1.5));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new(samples: &[f64]) -> Result<Self, StatsError> {
        ensure_min_len(samples, 2)?;
        ensure_finite(samples)?;
        let std_dev = descriptive::sample_variance(samples).sqrt();
        if std_dev <= 0.0 {
            return Err(StatsError::ConstantInput);
        }
        let scott_factor = (samples.len() as f64).powf(-0.2);
        Ok(Self {
            samples: samples.to_vec(),
            bandwidth: scott_factor * std_dev,
        })
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Probability density at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        let norm = (2.0 * PI).sqrt() * self.bandwidth * self.samples.len() as f64;
        self.samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            / norm
    }

    /// Samples the density at `points` evenly spaced positions over `[start, end]`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn curve(&self, start: f64, end: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return vec![(start, self.density(start))];
        }
        let step = (end - start) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = start + i as f64 * step;
                (x, self.density(x))
            })
            .collect()
    }
}
