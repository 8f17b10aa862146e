use plotters::style::RGBColor;

use crate::color::{to_plot_color, ACTUAL, OBSERVED};

// ---------------------------------------------------------------------------
// Chart appearance
// ---------------------------------------------------------------------------

/// One plotted series: legend label and line colour.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub color: RGBColor,
}

/// Fixed appearance of the comparison chart.
///
/// Sizes are in backend pixels; the PDF backend maps 100 px to one inch,
/// so the default 640×480 figure is a 6.4×4.8 inch page.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub size: (u32, u32),
    pub observed: SeriesStyle,
    pub actual: SeriesStyle,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub font_family: &'static str,
    pub label_size: f64,
    pub desc_size: f64,
    pub line_width: u32,
    /// Plot area edges as fractions of the figure, measured from the left
    /// and from the bottom (`left`, `right`, `bottom`, `top`).
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            size: (640, 480),
            observed: SeriesStyle {
                label: "Observed",
                color: to_plot_color(OBSERVED),
            },
            actual: SeriesStyle {
                label: "Actual",
                color: to_plot_color(ACTUAL),
            },
            x_desc: "Content Index",
            y_desc: "Frequency Percentage [%]",
            font_family: "sans-serif",
            label_size: 14.0,
            desc_size: 14.0,
            line_width: 2,
            left: 0.125,
            right: 0.9,
            // raised from the usual 0.11 so the x-axis label fits
            bottom: 0.15,
            top: 0.88,
        }
    }
}

impl ChartStyle {
    /// Margin and label-area sizes in pixels:
    /// `(left label area, right margin, bottom label area, top margin)`.
    pub fn layout(&self) -> (u32, u32, u32, u32) {
        let (w, h) = (f64::from(self.size.0), f64::from(self.size.1));
        let px = |v: f64| v.round().max(0.0) as u32;
        (
            px(self.left * w),
            px((1.0 - self.right) * w),
            px(self.bottom * h),
            px((1.0 - self.top) * h),
        )
    }
}
