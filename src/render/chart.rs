use std::ops::Range;

use log::debug;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::PathElement;
use plotters::prelude::DrawingBackend;
use plotters::series::LineSeries;
use plotters::style::{Color, TRANSPARENT};

use super::error::RenderError;
use super::style::ChartStyle;
use crate::color::{to_plot_color, BACKGROUND, FOREGROUND, GRID};
use crate::data::model::Distribution;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Legend sample line length in pixels.
const LEGEND_LINE: i32 = 20;

/// Largest value magnitude the value axis is laid out for. Tick spacing
/// for wider ranges overflows to infinity.
pub const MAX_MAGNITUDE: f64 = 1e100;

/// Draw the observed/actual comparison onto `root`.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    dist: &Distribution,
    y_range: Range<f64>,
    style: &ChartStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&to_plot_color(BACKGROUND))?;

    let index_axis = x_range(dist.len());
    debug!("axes x {index_axis:?}, y {y_range:?}");

    let (left, right, bottom, top) = style.layout();
    let mut chart = ChartBuilder::on(root)
        .margin_top(top)
        .margin_right(right)
        .x_label_area_size(bottom)
        .y_label_area_size(left)
        .build_cartesian_2d(index_axis, y_range)?;

    let foreground = to_plot_color(FOREGROUND);
    chart
        .configure_mesh()
        .x_desc(style.x_desc)
        .y_desc(style.y_desc)
        .label_style((style.font_family, style.label_size))
        .axis_desc_style((style.font_family, style.desc_size))
        .axis_style(foreground)
        .bold_line_style(to_plot_color(GRID).stroke_width(1))
        .light_line_style(TRANSPARENT)
        .draw()?;

    for (series, points) in [
        (style.observed, dist.observed_points()),
        (style.actual, dist.actual_points()),
    ] {
        let line = series.color.stroke_width(style.line_width);
        let points = points.into_iter().filter(|(_, y)| y.is_finite());
        chart
            .draw_series(LineSeries::new(points, line))?
            .label(series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_LINE, y)], line));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((style.font_family, style.label_size))
        .background_style(to_plot_color(BACKGROUND))
        .border_style(foreground)
        .draw()?;

    Ok(())
}

/// The padded value axis over both series.
pub fn value_axis(dist: &Distribution) -> Result<Range<f64>, RenderError> {
    let (lo, hi) = dist.value_range().unwrap_or((0.0, 0.0));
    if lo.abs().max(hi.abs()) > MAX_MAGNITUDE {
        return Err(RenderError::OutOfRange { lo, hi });
    }
    Ok(padded(lo, hi))
}

/// The index axis `1..=n`, padded like the value axis.
fn x_range(n: usize) -> Range<f64> {
    padded(1.0, n.max(1) as f64)
}

/// `lo..hi` widened by [`AXIS_MARGIN`] of the span on both sides; a zero
/// span is widened around the value instead.
fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * AXIS_MARGIN
    } else if lo != 0.0 {
        lo.abs() * AXIS_MARGIN
    } else {
        0.5
    };
    (lo - pad)..(hi + pad)
}
