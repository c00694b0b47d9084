mod app;
mod color;
mod ui;

use anyhow::Result;
use app::SensorDiagApp;
use clap::Parser;
use eframe::egui;
use sensor_diag::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "sensor-diag")]
#[command(about = "Sensor fault diagnosis dashboard")]
#[command(version)]
struct CliArgs {
    #[command(flatten)]
    settings: Settings,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    // Without a model there is nothing to diagnose, so fail before opening a window.
    let classifier = args.settings.load_classifier().inspect_err(|e| {
        log::error!("{e:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor Diag – Fault Diagnosis",
        options,
        Box::new(|_cc| Ok(Box::new(SensorDiagApp::new(classifier)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
