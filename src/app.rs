use eframe::egui;
use sensor_diag::diagnosis::ForestClassifier;
use sensor_diag::state::AppState;

use crate::color::LabelPalette;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SensorDiagApp {
    pub state: AppState,
    /// Loaded once at startup, read-only afterwards.
    pub classifier: ForestClassifier,
    pub palette: LabelPalette,
}

impl SensorDiagApp {
    pub fn new(classifier: ForestClassifier) -> Self {
        Self {
            state: AppState::default(),
            classifier,
            palette: LabelPalette::new(),
        }
    }
}

impl eframe::App for SensorDiagApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.classifier);
        });

        // ---- Left side panel: inputs and diagnosis ----
        egui::SidePanel::left("diagnosis_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.classifier, &self.palette);
            });

        // ---- Central panel: signal chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::signal_plot(ui, &self.state, &self.palette);
        });
    }
}
