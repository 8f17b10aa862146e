//! # dist-plotter
//!
//! Plot an observed content-popularity distribution against the actual one.
//!
//! ```bash
//! # reads 1000_10_0.25.txt, writes 1000_10_0.25.pdf
//! dist-plotter 1000_10_0.25.txt 1000_10_0.25
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` (or `debug`) for more.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dist_plotter::{load_file, output_path, render_chart};

/// Plot observed vs. actual distributions to PDF
#[derive(Parser)]
#[command(name = "dist-plotter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file: observed counts on line 1, actual distribution on line 2
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output base name; the chart is written to <OUTPUT>.pdf
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dist = load_file(&cli.input)
        .with_context(|| format!("Failed to load distribution from {}", cli.input.display()))?;

    let path = render_chart(&dist, &cli.output)
        .with_context(|| format!("Failed to plot {}", output_path(&cli.output).display()))?;

    info!("plotted {} contents to {}", dist.len(), path.display());
    Ok(())
}
