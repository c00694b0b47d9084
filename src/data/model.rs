use serde::Serialize;
use statrs::statistics::Statistics;

/// Fewest readings for which a sample standard deviation is defined.
pub const MIN_SERIES_LEN: usize = 2;

// ---------------------------------------------------------------------------
// SensorSeries – the readings supplied by one input event
// ---------------------------------------------------------------------------

/// An ordered sequence of sensor readings.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSeries {
    values: Vec<f64>,
}

impl SensorSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Readings in their original order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no readings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean and sample standard deviation (n − 1).
    ///
    /// Returns `None` when the series is shorter than [`MIN_SERIES_LEN`],
    /// where the sample standard deviation would be NaN.
    pub fn features(&self) -> Option<FeatureVector> {
        if self.values.len() < MIN_SERIES_LEN {
            return None;
        }
        Some(FeatureVector {
            mean: self.values.iter().mean(),
            std_dev: self.values.iter().std_dev(),
        })
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – classifier input
// ---------------------------------------------------------------------------

/// The two summary statistics the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub mean: f64,
    pub std_dev: f64,
}

impl FeatureVector {
    /// Number of features, in the order of [`FeatureVector::as_array`].
    pub const LEN: usize = 2;

    /// Features in classifier column order: `[mean, std_dev]`.
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [self.mean, self.std_dev]
    }

    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite()
    }
}
