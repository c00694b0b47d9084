//! Diagnosis engine: features → classifier → labelled, scored result.

pub mod classifier;
pub mod label;

use serde::Serialize;
use thiserror::Error;

use crate::data::model::{FeatureVector, SensorSeries, MIN_SERIES_LEN};

/// How far a class distribution may stray from summing to 1.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

pub use classifier::{Classifier, ForestClassifier, ModelError};
pub use label::FaultLabel;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("need at least {min} readings to diagnose, got {len}", min = MIN_SERIES_LEN)]
    InsufficientData { len: usize },

    #[error("readings are too large to summarize")]
    NonFiniteFeatures,

    #[error("classifier returned unknown class {0}")]
    UnknownClass(usize),

    #[error("classifier returned invalid probabilities: {0}")]
    InvalidProbabilities(String),

    #[error(transparent)]
    Classifier(#[from] ModelError),
}

/// Everything the dashboard shows about one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    pub label: FaultLabel,
    /// Winning-class probability in percent, 2 decimals.
    pub confidence: f64,
    /// 0–100, 100 being healthy.
    pub health_score: f64,
    pub explanation: &'static str,
    pub features: FeatureVector,
    /// Per-class probabilities indexed by [`FaultLabel::index`].
    pub probabilities: Vec<f64>,
}

/// Classify a series with `classifier`.
///
/// Deterministic for a fixed classifier: the same series always yields
/// the same result.
pub fn diagnose<C>(
    classifier: &C,
    series: &SensorSeries,
) -> Result<DiagnosisResult, DiagnosisError>
where
    C: Classifier + ?Sized,
{
    let features = series
        .features()
        .ok_or(DiagnosisError::InsufficientData { len: series.len() })?;
    if !features.is_finite() {
        return Err(DiagnosisError::NonFiniteFeatures);
    }
    log::debug!("features: mean={:.4} std={:.4}", features.mean, features.std_dev);

    let index = classifier.predict(&features)?;
    let label = FaultLabel::from_index(index).ok_or(DiagnosisError::UnknownClass(index))?;

    let probabilities = classifier.predict_proba(&features)?;
    check_probabilities(&probabilities)?;
    log::debug!("class probabilities: {probabilities:?}");

    let max_proba = probabilities.iter().copied().fold(0.0, f64::max);
    let confidence = round2(max_proba * 100.0);

    Ok(DiagnosisResult {
        label,
        confidence,
        health_score: health_score(label, confidence),
        explanation: label.explanation(),
        features,
        probabilities,
    })
}

/// Heuristic health: 100 for a normal sensor, otherwise the share of
/// probability mass the winning fault did not claim.
///
/// This is a placeholder business rule, not a statistical quantity.
pub fn health_score(label: FaultLabel, confidence: f64) -> f64 {
    if label.is_fault() {
        round2((100.0 - confidence).max(0.0))
    } else {
        100.0
    }
}

/// Round half away from zero to 2 decimals.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn check_probabilities(proba: &[f64]) -> Result<(), DiagnosisError> {
    if proba.len() != FaultLabel::COUNT {
        return Err(DiagnosisError::InvalidProbabilities(format!(
            "expected {} classes, got {}",
            FaultLabel::COUNT,
            proba.len()
        )));
    }
    if let Some(p) = proba.iter().find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0) {
        return Err(DiagnosisError::InvalidProbabilities(format!(
            "{p} is outside [0, 1]"
        )));
    }
    let total: f64 = proba.iter().sum();
    if (total - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(DiagnosisError::InvalidProbabilities(format!(
            "probabilities sum to {total}, not 1"
        )));
    }
    Ok(())
}
