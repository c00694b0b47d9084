//! End-to-end checks against the classifier artifact shipped in `assets/`.
//!
//! Exercises the same path as the dashboard: input source -> features ->
//! forest -> labelled, scored result.

use std::path::PathBuf;

use sensor_diag::config::Settings;
use sensor_diag::data::loader::{self, InputError};
use sensor_diag::data::model::SensorSeries;
use sensor_diag::data::samples::{Preset, NOISE_SAMPLE, NORMAL_SAMPLE};
use sensor_diag::diagnosis::{diagnose, DiagnosisError, FaultLabel, ForestClassifier};

fn shipped_model() -> ForestClassifier {
    let settings = Settings {
        model_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/sensor_model.json"),
    };
    settings.load_classifier().expect("shipped model loads")
}

#[test]
fn presets_classify_as_their_namesake() {
    let model = shipped_model();
    let expected = [
        (Preset::Normal, FaultLabel::Normal),
        (Preset::Drift, FaultLabel::DriftFault),
        (Preset::Noise, FaultLabel::NoiseFault),
        (Preset::Stuck, FaultLabel::StuckFault),
    ];
    for (preset, label) in expected {
        let result = diagnose(&model, &preset.series()).unwrap();
        assert_eq!(result.label, label, "{preset} preset");
        assert_eq!(result.explanation, label.explanation());
    }
}

#[test]
fn normal_preset_features_and_score() {
    let model = shipped_model();
    let result = diagnose(&model, &Preset::Normal.series()).unwrap();

    assert!((result.features.mean - 25.114).abs() < 1e-3);
    assert!((result.features.std_dev - 0.1345).abs() < 1e-3);
    assert!((result.confidence - 93.42).abs() < 0.006, "{}", result.confidence);
    assert_eq!(result.health_score, 100.0);
}

#[test]
fn stuck_preset_has_zero_spread_and_low_health() {
    let model = shipped_model();
    let result = diagnose(&model, &Preset::Stuck.series()).unwrap();

    assert_eq!(result.features.std_dev, 0.0);
    assert_eq!(result.label, FaultLabel::StuckFault);
    assert!((result.confidence - 96.95).abs() < 0.006, "{}", result.confidence);
    assert!((result.health_score - (100.0 - result.confidence)).abs() < 1e-9);
}

#[test]
fn scores_stay_in_range_for_varied_inputs() {
    let model = shipped_model();
    let inputs: Vec<Vec<f64>> = vec![
        vec![0.0, 0.0],
        vec![-5.0, 5.0],
        vec![1e6, -1e6, 1e6, -1e6],
        (0..200).map(|i| (i as f64 * 0.37).sin() * 3.0).collect(),
        (0..50).map(|i| i as f64 * 0.01).collect(),
        vec![30.0, 30.0, 30.0, 30.0001],
    ];

    for values in inputs {
        let result = diagnose(&model, &SensorSeries::new(values.clone())).unwrap();
        assert!(FaultLabel::ALL.contains(&result.label));
        assert!((0.0..=100.0).contains(&result.confidence), "{values:?}");
        assert!((0.0..=100.0).contains(&result.health_score), "{values:?}");
        if result.label == FaultLabel::Normal {
            assert_eq!(result.health_score, 100.0);
        } else {
            let expected = (100.0 - result.confidence).max(0.0);
            assert!((result.health_score - expected).abs() < 1e-9);
        }
        let total: f64 = result.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn repeated_diagnosis_is_bit_identical() {
    let model = shipped_model();
    let series = Preset::Drift.series();
    let first = diagnose(&model, &series).unwrap();
    let second = diagnose(&model, &series).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
    assert_eq!(first.features.std_dev.to_bits(), second.features.std_dev.to_bits());
}

#[test]
fn sample_downloads_diagnose_as_labelled() {
    let model = shipped_model();

    let normal = loader::parse_bytes(NORMAL_SAMPLE.contents.as_bytes()).unwrap();
    assert_eq!(diagnose(&model, &normal).unwrap().label, FaultLabel::Normal);

    let noise = loader::parse_bytes(NOISE_SAMPLE.contents.as_bytes()).unwrap();
    assert_eq!(diagnose(&model, &noise).unwrap().label, FaultLabel::NoiseFault);
}

#[test]
fn upload_without_value_column_is_a_schema_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("temps.csv");
    std::fs::write(&path, "temperature\n25.1\n25.2\n").unwrap();

    let err = loader::load_file(&path).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { .. }));
}

#[test]
fn single_reading_is_rejected() {
    let model = shipped_model();
    let series = loader::parse_bytes(b"value\n42.0\n").unwrap();
    assert!(matches!(
        diagnose(&model, &series),
        Err(DiagnosisError::InsufficientData { len: 1 })
    ));
}

#[test]
fn json_output_uses_display_names() {
    let model = shipped_model();
    let result = diagnose(&model, &Preset::Noise.series()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["label"], "Noise Fault");
    assert_eq!(json["explanation"], "high variability detected");
    assert_eq!(json["probabilities"].as_array().unwrap().len(), 4);
    assert!(json["features"]["std_dev"].as_f64().unwrap() > 10.0);
}
