use std::fmt;

use serde::Serialize;

/// Classifier output classes, in classifier index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FaultLabel {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Noise Fault")]
    NoiseFault,
    #[serde(rename = "Drift Fault")]
    DriftFault,
    #[serde(rename = "Stuck Fault")]
    StuckFault,
}

impl FaultLabel {
    pub const COUNT: usize = 4;

    /// Every label, position `i` holding the label for class index `i`.
    pub const ALL: [FaultLabel; Self::COUNT] = [
        FaultLabel::Normal,
        FaultLabel::NoiseFault,
        FaultLabel::DriftFault,
        FaultLabel::StuckFault,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            FaultLabel::Normal => 0,
            FaultLabel::NoiseFault => 1,
            FaultLabel::DriftFault => 2,
            FaultLabel::StuckFault => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FaultLabel::Normal => "Normal",
            FaultLabel::NoiseFault => "Noise Fault",
            FaultLabel::DriftFault => "Drift Fault",
            FaultLabel::StuckFault => "Stuck Fault",
        }
    }

    /// One-line reading of what the label means for the sensor.
    pub fn explanation(self) -> &'static str {
        match self {
            FaultLabel::Normal => "operating within expected range",
            FaultLabel::NoiseFault => "high variability detected",
            FaultLabel::DriftFault => "gradual trend change observed",
            FaultLabel::StuckFault => "output appears constant (possible failure)",
        }
    }

    pub fn is_fault(self) -> bool {
        self != FaultLabel::Normal
    }
}

impl fmt::Display for FaultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
