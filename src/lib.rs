//! Sensor fault diagnosis.
//!
//! A sensor series is reduced to its mean and sample standard deviation,
//! scored by a pre-trained forest classifier, and reported as one of four
//! fault labels with a confidence and a health score.

pub mod config;
pub mod data;
pub mod diagnosis;
pub mod state;
