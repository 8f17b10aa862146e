use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a distribution file.
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("cannot read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed record")]
    Record {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("line {line} is missing (expected observed counts on line 1, actual values on line 2)")]
    MissingLine { line: usize },

    #[error("line {line}, value {position}: '{token}' is not a number")]
    Parse {
        line: usize,
        position: usize,
        token: String,
    },

    #[error("observed counts sum to {total}; cannot express them as percentages")]
    DegenerateInput { total: f64 },
}
