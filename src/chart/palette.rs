//! Species color assignment.

use plotters::style::RGBColor;

/// Pick a stable color for the species at `index` out of `total` columns.
///
/// Hues are spread evenly around the color wheel so adjacent stack
/// segments stay distinguishable for any species count.
pub fn species_color(index: usize, total: usize) -> RGBColor {
    #[allow(clippy::cast_precision_loss)]
    let hue = 360.0 * index as f32 / total.max(1) as f32;
    hsl_to_rgb(hue, 0.62, 0.48)
}

/// Convert an HSL color to RGB.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> RGBColor {
    if saturation == 0.0 {
        let gray = (lightness * 255.0).round().clamp(0.0, 255.0) as u8;
        return RGBColor(gray, gray, gray);
    }

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue % 360.0) / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let offset = lightness - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    let to_byte = |v: f32| ((v + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
    RGBColor(to_byte(r), to_byte(g), to_byte(b))
}
