use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use super::error::DistributionError;
use super::model::Distribution;
use super::normalize::total;

const OBSERVED_LINE: usize = 1;
const ACTUAL_LINE: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a distribution file.
///
/// Layout (no header, any further lines are ignored):
/// ```text
/// 12,30,7,1        <- observed request counts, normalized to percent
/// 20.1,45.3,25,9.6 <- actual distribution, used as-is
/// ```
pub fn load_file(path: &Path) -> Result<Distribution, DistributionError> {
    let file = File::open(path).map_err(|source| DistributionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let dist = parse_distribution(file)?;
    info!(
        "loaded {} contents from {} ({} actual values)",
        dist.len(),
        path.display(),
        dist.actual().len()
    );
    Ok(dist)
}

/// Parse the first two lines of `reader` into a [`Distribution`].
pub fn parse_distribution<R: Read>(reader: R) -> Result<Distribution, DistributionError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let observed_counts = next_sequence(&mut records, OBSERVED_LINE)?;
    let actual = next_sequence(&mut records, ACTUAL_LINE)?;

    if observed_counts.iter().any(|&v| v < 0.0) {
        warn!("observed line contains negative counts");
    }
    let actual_total = total(&actual);
    if (actual_total - 100.0).abs() > 1.0 {
        warn!("actual values sum to {actual_total:.3}, not 100");
    }
    debug!(
        "observed total {}, {} observed / {} actual values",
        total(&observed_counts),
        observed_counts.len(),
        actual.len()
    );

    Distribution::from_counts(&observed_counts, actual)
}

/// Parse comma-separated tokens into floats, reporting the first bad token.
pub fn parse_sequence<'a, I>(tokens: I, line: usize) -> Result<Vec<f64>, DistributionError>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, tok)| {
            let tok = tok.trim();
            tok.parse::<f64>().map_err(|_| DistributionError::Parse {
                line,
                position: i + 1,
                token: tok.to_string(),
            })
        })
        .collect()
}

fn next_sequence<R: Read>(
    records: &mut csv::StringRecordsIter<'_, R>,
    line: usize,
) -> Result<Vec<f64>, DistributionError> {
    let record = records
        .next()
        .ok_or(DistributionError::MissingLine { line })?
        .map_err(|source| DistributionError::Record { line, source })?;
    // the reader skips empty lines; an empty line in place is an empty token
    let found = record.position().map_or(line as u64, |pos| pos.line());
    if found != line as u64 {
        return Err(DistributionError::Parse {
            line,
            position: 1,
            token: String::new(),
        });
    }
    parse_sequence(record.iter(), line)
}
