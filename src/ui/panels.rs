use eframe::egui::{self, Color32, ProgressBar, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use sensor_diag::data::samples::{Preset, SampleFile, SAMPLE_FILES};
use sensor_diag::diagnosis::{Classifier, DiagnosisResult, FaultLabel};
use sensor_diag::state::{AppState, Status};

use crate::color::{health_color, LabelPalette};

// ---------------------------------------------------------------------------
// Left side panel – inputs and verdict
// ---------------------------------------------------------------------------

/// Render the left panel: preset buttons, sample downloads, diagnosis.
pub fn side_panel<C: Classifier>(
    ui: &mut Ui,
    state: &mut AppState,
    classifier: &C,
    palette: &LabelPalette,
) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Try a sample signal");
            ui.separator();
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for preset in Preset::ALL {
                    if ui.button(preset.title()).clicked() {
                        state.load_preset(classifier, preset);
                    }
                }
            });
            if ui.button("Upload sensor CSV…").clicked() {
                open_file_dialog(state, classifier);
            }

            ui.add_space(8.0);
            ui.heading("Download sample files");
            ui.separator();
            for sample in &SAMPLE_FILES {
                if ui.button(format!("Save {}…", sample.label)).clicked() {
                    save_sample_dialog(state, sample);
                }
            }

            ui.add_space(8.0);
            ui.heading("Diagnosis result");
            ui.separator();
            match &state.diagnosis {
                Some(result) => diagnosis_card(ui, result, state.source.as_deref(), palette),
                None => {
                    ui.label("No signal diagnosed yet.");
                }
            }
        });
}

fn diagnosis_card(
    ui: &mut Ui,
    result: &DiagnosisResult,
    source: Option<&str>,
    palette: &LabelPalette,
) {
    if let Some(source) = source {
        ui.weak(format!("Source: {source}"));
    }

    ui.label(
        RichText::new(format!("Fault Type: {}", result.label))
            .size(20.0)
            .strong()
            .color(palette.color_for(result.label)),
    );
    ui.label(result.explanation);
    ui.add_space(4.0);

    ui.label(format!("Confidence: {:.2}%", result.confidence));
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Health score:");
        ui.label(
            RichText::new(format!("{:.2}%", result.health_score))
                .strong()
                .color(health_color(result.health_score)),
        );
    });
    ui.add_space(4.0);

    ui.weak(format!(
        "mean = {:.4}   std = {:.4}",
        result.features.mean, result.features.std_dev
    ));
    ui.add_space(6.0);

    probability_table(ui, result, palette);
}

fn probability_table(ui: &mut Ui, result: &DiagnosisResult, palette: &LabelPalette) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(120.0))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Class");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Probability");
            });
        })
        .body(|mut body| {
            for label in FaultLabel::ALL {
                let p = result.probabilities.get(label.index()).copied().unwrap_or(0.0);
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        let mut text = RichText::new(label.name());
                        if label == result.label {
                            text = text.strong();
                        }
                        ui.label(text);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.add(
                            ProgressBar::new(p as f32)
                                .fill(palette.color_for(label))
                                .text(format!("{:.1}%", p * 100.0)),
                        );
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar<C: Classifier>(ui: &mut Ui, state: &mut AppState, classifier: &C) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state, classifier);
                ui.close_menu();
            }
            ui.separator();
            for sample in &SAMPLE_FILES {
                if ui.button(format!("Save {}…", sample.label)).clicked() {
                    save_sample_dialog(state, sample);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if let (Some(series), Some(source)) = (&state.series, &state.source) {
            ui.label(format!("{source}: {} readings", series.len()));
        }

        ui.separator();

        match &state.status {
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            Some(Status::Info(msg)) => {
                ui.label(msg);
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog<C: Classifier>(state: &mut AppState, classifier: &C) {
    let file = rfd::FileDialog::new()
        .set_title("Upload sensor CSV")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(classifier, &path);
    }
}

pub fn save_sample_dialog(state: &mut AppState, sample: &SampleFile) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Save {}", sample.label))
        .set_file_name(sample.file_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match sample.save(&path) {
            Ok(()) => {
                log::info!("Saved {} to {}", sample.file_name, path.display());
                state.notify(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save sample: {e:#}");
                state.report_error(format!("Error: {e:#}"));
            }
        }
    }
}
