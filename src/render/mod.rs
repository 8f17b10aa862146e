//! Rendering: lays the distribution out as a line chart with `plotters` and
//! writes it as a one-page PDF.

pub mod chart;
pub mod error;
pub mod font;
pub mod pdf;
pub mod style;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::drawing::IntoDrawingArea;

use crate::data::model::Distribution;
pub use error::RenderError;
pub use pdf::PdfBackend;
pub use style::ChartStyle;

/// Extension appended to the output base name.
pub const EXTENSION: &str = "pdf";

/// `<base>.pdf`. The extension is appended, never substituted, so a base
/// such as `1000_10_0.25` keeps its dots.
pub fn output_path(base: &Path) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Render `dist` with the default style and write it to `<base>.pdf`.
/// Returns the path written.
pub fn render_chart(dist: &Distribution, base: &Path) -> Result<PathBuf, RenderError> {
    let bytes = render_pdf(dist, &ChartStyle::default())?;
    let path = output_path(base);
    fs::write(&path, &bytes).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Render `dist` into an in-memory PDF document.
pub fn render_pdf(dist: &Distribution, style: &ChartStyle) -> Result<Vec<u8>, RenderError> {
    check_dimensions(dist)?;
    let y_range = chart::value_axis(dist)?;

    let mut bytes = Vec::new();
    {
        let root = PdfBackend::new(&mut bytes, style.size).into_drawing_area();
        chart::draw(&root, dist, y_range, style).map_err(|e| RenderError::Draw(e.to_string()))?;
        root.present()
            .map_err(|e| RenderError::Draw(e.to_string()))?;
    }
    debug!("rendered {} contents into {} bytes", dist.len(), bytes.len());
    Ok(bytes)
}

fn check_dimensions(dist: &Distribution) -> Result<(), RenderError> {
    if dist.is_empty() {
        return Err(RenderError::Empty);
    }
    if dist.actual().len() != dist.len() {
        return Err(RenderError::LengthMismatch {
            observed: dist.len(),
            actual: dist.actual().len(),
        });
    }
    Ok(())
}
