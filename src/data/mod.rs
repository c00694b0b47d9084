/// Data layer: sensor series, feature extraction, and input sources.
///
/// Architecture:
/// ```text
///   uploaded .csv        preset button
///        │                    │
///        ▼                    ▼
///   ┌──────────┐        ┌──────────┐
///   │  loader   │        │ samples  │  literal fixtures
///   └──────────┘        └──────────┘
///        │                    │
///        └─────────┬──────────┘
///                  ▼
///          ┌──────────────┐
///          │ SensorSeries │  Vec<f64> of readings
///          └──────────────┘
///                  │
///                  ▼
///          ┌──────────────┐
///          │FeatureVector │  (mean, sample std)
///          └──────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod samples;
