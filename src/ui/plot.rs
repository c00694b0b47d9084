use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints, Points};
use sensor_diag::state::AppState;

use crate::color::LabelPalette;

// ---------------------------------------------------------------------------
// Signal plot (central panel)
// ---------------------------------------------------------------------------

/// Render the raw sensor series with its mean.
pub fn signal_plot(ui: &mut Ui, state: &AppState, palette: &LabelPalette) {
    let series = match &state.series {
        Some(series) => series,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a sample signal or upload a CSV with a 'value' column");
            });
            return;
        }
    };

    let color = state
        .diagnosis
        .as_ref()
        .map(|d| palette.color_for(d.label))
        .unwrap_or(Color32::LIGHT_BLUE);

    let points: Vec<[f64; 2]> = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    Plot::new("signal_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Sample")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let name = state.source.as_deref().unwrap_or("signal");
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name(name)
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(points)).color(color).radius(3.0));

            if let Some(diagnosis) = &state.diagnosis {
                plot_ui.hline(
                    HLine::new(diagnosis.features.mean)
                        .name(format!("mean {:.3}", diagnosis.features.mean))
                        .color(Color32::GRAY)
                        .width(1.0),
                );
            }
        });
}
