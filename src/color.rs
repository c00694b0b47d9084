use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use sensor_diag::diagnosis::FaultLabel;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from green.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 120.0 + (i as f32 / n as f32) * 360.0;
            hsl_to_color32(hue % 360.0, 0.75, 0.55)
        })
        .collect()
}

/// Red (0) through amber to green (100).
pub fn health_color(score: f64) -> Color32 {
    let hue = (score.clamp(0.0, 100.0) / 100.0 * 120.0) as f32;
    hsl_to_color32(hue, 0.8, 0.5)
}

// ---------------------------------------------------------------------------
// Label colours: FaultLabel → Color32
// ---------------------------------------------------------------------------

/// One fixed colour per fault label, used for the verdict and chart.
#[derive(Debug, Clone)]
pub struct LabelPalette {
    colors: Vec<Color32>,
}

impl LabelPalette {
    pub fn new() -> Self {
        Self {
            colors: generate_palette(FaultLabel::COUNT),
        }
    }

    pub fn color_for(&self, label: FaultLabel) -> Color32 {
        self.colors
            .get(label.index())
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

impl Default for LabelPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_gets_a_distinct_colour() {
        let palette = LabelPalette::new();
        let colors: Vec<_> = FaultLabel::ALL.iter().map(|l| palette.color_for(*l)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn normal_is_green_and_low_health_is_red() {
        let normal = LabelPalette::new().color_for(FaultLabel::Normal);
        assert!(normal.g() > normal.r() && normal.g() > normal.b());

        let low = health_color(0.0);
        assert!(low.r() > low.g());
        let high = health_color(100.0);
        assert!(high.g() > high.r());
    }
}
