use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Hue step between consecutive series (golden angle), so adding a series
/// never changes the colours of the ones before it.
const HUE_STEP: f32 = 137.508;

/// Colour of the `index`-th plotted series.
pub fn series_color(index: usize) -> Color32 {
    let hue = (index as f32 * HUE_STEP + 210.0) % 360.0;
    let hsl = Hsl::new(hue, 0.70, 0.50);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours_are_stable_and_distinct() {
        let colors: Vec<Color32> = (0..6).map(series_color).collect();
        assert_eq!(series_color(2), colors[2]);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
