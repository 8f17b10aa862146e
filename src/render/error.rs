use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while drawing or saving the chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("observed has {observed} values but actual has {actual}; both series need one value per content")]
    LengthMismatch { observed: usize, actual: usize },

    #[error("nothing to plot: the distribution is empty")]
    Empty,

    #[error("values span {lo:e}..{hi:e}, too wide to lay out on an axis")]
    OutOfRange { lo: f64, hi: f64 },

    #[error("drawing chart: {0}")]
    Draw(String),

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
