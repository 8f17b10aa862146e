//! # dist-plotter
//!
//! Compare an observed content-popularity distribution with the actual one.
//!
//! The input is a text file whose first line holds the observed request
//! counts and whose second line holds the actual distribution in percent,
//! both comma-separated. The observed counts are normalized to percentages
//! and both series are drawn against the content index (1-based) into a
//! one-page PDF.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let dist = dist_plotter::load_file(Path::new("1000_10_0.25.txt"))?;
//! let pdf = dist_plotter::render_chart(&dist, Path::new("1000_10_0.25"))?;
//! assert_eq!(pdf, Path::new("1000_10_0.25.pdf"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod data;
pub mod render;

pub use data::error::DistributionError;
pub use data::loader::load_file;
pub use data::model::Distribution;
pub use render::{output_path, render_chart, RenderError};
