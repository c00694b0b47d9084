use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sensor_diag::data::samples::{write_series_csv, Preset, SAMPLE_FILES};

#[derive(Parser, Debug)]
#[command(name = "write-samples")]
#[command(about = "Write the downloadable sample CSVs and preset series to a directory")]
#[command(version)]
struct Args {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = "samples")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut written = 0;
    for sample in &SAMPLE_FILES {
        sample.save(&args.out.join(sample.file_name))?;
        written += 1;
    }

    for preset in Preset::ALL {
        let path = args.out.join(format!("preset_{}.csv", preset.name()));
        write_series_csv(&path, preset.values())?;
        log::debug!("wrote {} readings to {}", preset.values().len(), path.display());
        written += 1;
    }

    println!("Wrote {written} sample files to {}", args.out.display());
    Ok(())
}
