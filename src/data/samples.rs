use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use super::loader::VALUE_COLUMN;
use super::model::SensorSeries;

// ---------------------------------------------------------------------------
// Presets – literal series behind the dashboard buttons
// ---------------------------------------------------------------------------

/// Canned series illustrating each fault pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Normal,
    Drift,
    Noise,
    Stuck,
}

const NORMAL_VALUES: [f64; 7] = [25.1, 25.2, 24.9, 25.0, 25.3, 25.1, 25.2];
const DRIFT_VALUES: [f64; 9] = [20.0, 21.0, 22.5, 24.0, 25.5, 27.0, 28.5, 30.0, 31.5];
const NOISE_VALUES: [f64; 12] = [
    25.0, 40.0, 10.0, 35.0, 15.0, 30.0, 20.0, 45.0, 12.0, 38.0, 18.0, 33.0,
];
const STUCK_VALUES: [f64; 9] = [30.0; 9];

impl Preset {
    /// Button order in the dashboard.
    pub const ALL: [Preset; 4] = [Preset::Normal, Preset::Drift, Preset::Noise, Preset::Stuck];

    /// Lower-case identifier used on the command line and in file names.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Normal => "normal",
            Preset::Drift => "drift",
            Preset::Noise => "noise",
            Preset::Stuck => "stuck",
        }
    }

    /// Button caption.
    pub fn title(self) -> &'static str {
        match self {
            Preset::Normal => "Normal signal",
            Preset::Drift => "Drifting signal",
            Preset::Noise => "Noisy signal",
            Preset::Stuck => "Stuck signal",
        }
    }

    pub fn values(self) -> &'static [f64] {
        match self {
            Preset::Normal => &NORMAL_VALUES,
            Preset::Drift => &DRIFT_VALUES,
            Preset::Noise => &NOISE_VALUES,
            Preset::Stuck => &STUCK_VALUES,
        }
    }

    pub fn series(self) -> SensorSeries {
        SensorSeries::new(self.values().to_vec())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown preset '{0}' (expected normal, drift, noise or stuck)")]
pub struct UnknownPreset(String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Sample downloads – static CSV blobs offered to the user
// ---------------------------------------------------------------------------

/// A downloadable example upload.
#[derive(Debug, Clone, Copy)]
pub struct SampleFile {
    pub label: &'static str,
    pub file_name: &'static str,
    pub contents: &'static str,
}

pub const NORMAL_SAMPLE: SampleFile = SampleFile {
    label: "Normal sample",
    file_name: "normal_sample.csv",
    contents: "value\n25.1\n25.2\n24.9\n25.0\n25.3\n25.1\n25.2\n25.0\n",
};

pub const NOISE_SAMPLE: SampleFile = SampleFile {
    label: "Noise sample",
    file_name: "noise_sample.csv",
    contents: "value\n25\n40\n10\n35\n15\n30\n20\n45\n12\n38\n18\n33\n",
};

pub const SAMPLE_FILES: [SampleFile; 2] = [NORMAL_SAMPLE, NOISE_SAMPLE];

impl SampleFile {
    /// Write the blob verbatim.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.contents)
            .with_context(|| format!("writing {}", path.display()))
    }
}

/// Write `values` as a single-column CSV that the loader accepts.
pub fn write_series_csv(path: &Path, values: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([VALUE_COLUMN])?;
    for v in values {
        writer.write_record([v.to_string()])?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}
