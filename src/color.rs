use palette::{named, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Observed series.
pub const OBSERVED: Srgb<u8> = named::RED;
/// Actual series.
pub const ACTUAL: Srgb<u8> = named::BLUE;
/// Background grid lines.
pub const GRID: Srgb<u8> = named::SILVER;
/// Axes, text and legend frame.
pub const FOREGROUND: Srgb<u8> = named::BLACK;
pub const BACKGROUND: Srgb<u8> = named::WHITE;

/// Convert a palette colour into a plotters colour.
pub fn to_plot_color(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

/// Convert 8-bit RGB components into the `0.0..=1.0` floats PDF colour
/// operators expect.
pub fn to_unit_rgb((r, g, b): (u8, u8, u8)) -> [f32; 3] {
    let rgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
    [rgb.red, rgb.green, rgb.blue]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colours_are_pure_red_and_blue() {
        assert_eq!(to_plot_color(OBSERVED), RGBColor(255, 0, 0));
        assert_eq!(to_plot_color(ACTUAL), RGBColor(0, 0, 255));
    }

    #[test]
    fn unit_rgb_spans_zero_to_one() {
        assert_eq!(to_unit_rgb((255, 0, 0)), [1.0, 0.0, 0.0]);
        assert_eq!(to_unit_rgb((0, 0, 0)), [0.0, 0.0, 0.0]);
        let [r, g, b] = to_unit_rgb((192, 192, 192));
        assert!((r - 192.0 / 255.0).abs() < 1e-6);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
