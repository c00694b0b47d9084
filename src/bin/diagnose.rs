use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sensor_diag::config::Settings;
use sensor_diag::data::loader;
use sensor_diag::data::samples::Preset;
use sensor_diag::diagnosis::{diagnose, DiagnosisResult, FaultLabel};

#[derive(Parser, Debug)]
#[command(name = "diagnose")]
#[command(about = "Diagnose one sensor series from a CSV file or a built-in preset")]
#[command(version)]
struct Args {
    #[command(flatten)]
    settings: Settings,

    /// Built-in series to diagnose: normal, drift, noise or stuck
    #[arg(long, conflicts_with = "file")]
    preset: Option<Preset>,

    /// CSV file with a `value` column
    #[arg(required_unless_present = "preset")]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let classifier = args.settings.load_classifier()?;

    let (source, series) = match (&args.preset, &args.file) {
        (Some(preset), _) => (format!("{preset} preset"), preset.series()),
        (None, Some(path)) => {
            let series = loader::load_file(path)
                .with_context(|| format!("reading {}", path.display()))?;
            (path.display().to_string(), series)
        }
        (None, None) => anyhow::bail!("either --preset or a CSV file is required"),
    };

    let result =
        diagnose(&classifier, &series).with_context(|| format!("diagnosing {source}"))?;
    log::info!("{source}: {} readings diagnosed as {}", series.len(), result.label);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&source, &result);
    }
    Ok(())
}

fn print_report(source: &str, result: &DiagnosisResult) {
    println!("Source:       {source}");
    println!("Fault type:   {}", result.label);
    println!("Explanation:  {}", result.explanation);
    println!("Confidence:   {:.2}%", result.confidence);
    println!("Health score: {:.2}%", result.health_score);
    println!(
        "Features:     mean={:.4} std={:.4}",
        result.features.mean, result.features.std_dev
    );
    for label in FaultLabel::ALL {
        let p = result.probabilities[label.index()];
        println!("  {:<12} {:>6.2}%", label.name(), p * 100.0);
    }
}
