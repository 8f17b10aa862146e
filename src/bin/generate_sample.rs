//! Write a synthetic distribution file in the layout `dist-plotter` reads.
//!
//! Contents are requested with Zipf popularity. The file has three lines,
//! like the simulation output it stands in for:
//!
//! 1. observed request counts per content,
//! 2. the actual popularity in percent,
//! 3. a second, independently sampled request histogram (ignored by the plotter).

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a sample observed/actual distribution file
#[derive(Parser)]
#[command(name = "generate-sample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file path
    #[arg(value_name = "OUTPUT", default_value = "sample_distribution.txt")]
    output: PathBuf,

    /// Number of distinct contents
    #[arg(short = 'n', long, default_value = "10")]
    contents: usize,

    /// Number of requests to sample per histogram
    #[arg(short = 'r', long, default_value = "10000")]
    requests: usize,

    /// Zipf exponent of the popularity distribution
    #[arg(short = 's', long, default_value = "1.0")]
    exponent: f64,

    /// Random seed
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Zipf popularity of `n` contents in percent: content `k` gets weight
/// `1 / k^s`, scaled so the weights sum to 100.
fn zipf_percentages(n: usize, s: f64) -> Vec<f64> {
    let weights: Vec<f64> = (1..=n).map(|k| 1.0 / (k as f64).powf(s)).collect();
    let total: f64 = weights.iter().sum();
    weights.iter().map(|w| w / total * 100.0).collect()
}

/// Draw `requests` contents according to `percentages` and count the hits.
fn sample_histogram<R: Rng>(percentages: &[f64], requests: usize, rng: &mut R) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(percentages.len());
    let mut acc = 0.0;
    for p in percentages {
        acc += p;
        cumulative.push(acc);
    }

    let mut counts = vec![0.0; percentages.len()];
    for _ in 0..requests {
        let u = rng.gen::<f64>() * acc;
        let idx = cumulative.partition_point(|&c| c <= u).min(counts.len() - 1);
        counts[idx] += 1.0;
    }
    counts
}

fn format_line(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    ensure!(cli.contents > 0, "--contents must be at least 1");
    ensure!(cli.requests > 0, "--requests must be at least 1");

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let actual = zipf_percentages(cli.contents, cli.exponent);
    let observed = sample_histogram(&actual, cli.requests, &mut rng);
    let resampled = sample_histogram(&actual, cli.requests, &mut rng);
    debug!("observed counts {observed:?}");

    let text = format!(
        "{}\n{}\n{}\n",
        format_line(&observed),
        format_line(&actual),
        format_line(&resampled)
    );
    fs::write(&cli.output, text)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        "wrote {} contents, {} requests (s = {}) to {}",
        cli.contents,
        cli.requests,
        cli.exponent,
        cli.output.display()
    );
    Ok(())
}
