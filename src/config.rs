use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::diagnosis::ForestClassifier;

/// Artifact location when neither `--model` nor the env var is given.
pub const DEFAULT_MODEL_PATH: &str = "assets/sensor_model.json";

/// Environment variable overriding the artifact location.
pub const MODEL_ENV_VAR: &str = "SENSOR_DIAG_MODEL";

/// Settings shared by every binary, flattened into each one's CLI.
#[derive(Debug, Clone, clap::Args)]
pub struct Settings {
    /// Path to the trained classifier artifact (JSON)
    #[arg(
        long = "model",
        value_name = "PATH",
        env = MODEL_ENV_VAR,
        default_value = DEFAULT_MODEL_PATH
    )]
    pub model_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Settings {
    /// Load the classifier once; callers own it for the process lifetime.
    pub fn load_classifier(&self) -> Result<ForestClassifier> {
        let model = ForestClassifier::load(&self.model_path)
            .with_context(|| format!("loading model from {}", self.model_path.display()))?;
        log::info!(
            "Loaded classifier with {} trees from {}",
            model.num_trees(),
            self.model_path.display()
        );
        Ok(model)
    }
}
