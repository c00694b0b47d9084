use std::path::Path;

use crate::data::loader;
use crate::data::model::SensorSeries;
use crate::data::samples::Preset;
use crate::diagnosis::{diagnose, Classifier, DiagnosisResult};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Where the dashboard is in its two-state cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    ResultDisplayed,
}

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
///
/// Each input event replaces the shown series and result when it diagnoses
/// cleanly. A failed event only sets an error status; whatever was shown
/// before stays on screen.
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,

    /// Series currently charted.
    pub series: Option<SensorSeries>,

    /// Human-readable origin of `series` (preset name or file name).
    pub source: Option<String>,

    /// Result for `series`.
    pub diagnosis: Option<DiagnosisResult>,

    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::AwaitingInput,
            series: None,
            source: None,
            diagnosis: None,
            status: None,
        }
    }
}

impl AppState {
    /// Diagnose one of the canned series.
    pub fn load_preset<C: Classifier + ?Sized>(&mut self, classifier: &C, preset: Preset) {
        self.ingest(classifier, format!("{} preset", preset.name()), preset.series());
    }

    /// Diagnose an uploaded CSV file.
    pub fn load_file<C: Classifier + ?Sized>(&mut self, classifier: &C, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match loader::load_file(path) {
            Ok(series) => self.ingest(classifier, name, series),
            Err(e) if e.is_schema_error() => {
                log::warn!("Rejected {}: {e}", path.display());
                self.status = Some(Status::Error(format!("{name}: {e}")));
            }
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                self.status = Some(Status::Error(format!("{name}: {e}")));
            }
        }
    }

    /// Diagnose `series`; only a successful diagnosis replaces what is shown.
    pub fn ingest<C: Classifier + ?Sized>(
        &mut self,
        classifier: &C,
        source: String,
        series: SensorSeries,
    ) {
        match diagnose(classifier, &series) {
            Ok(result) => {
                log::info!(
                    "{source}: {} ({:.2}% confidence, health {:.2})",
                    result.label,
                    result.confidence,
                    result.health_score
                );
                self.phase = Phase::ResultDisplayed;
                self.series = Some(series);
                self.source = Some(source);
                self.diagnosis = Some(result);
                self.status = None;
            }
            Err(e) => {
                log::error!("Diagnosis of {source} failed: {e}");
                self.status = Some(Status::Error(format!("{source}: {e}")));
            }
        }
    }

    /// Record a non-error notice, e.g. a saved sample file.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Info(message.into()));
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Error(message.into()));
    }
}
