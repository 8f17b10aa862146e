use std::ops::RangeInclusive;

use super::error::DistributionError;
use super::normalize::to_percentages;

// ---------------------------------------------------------------------------
// Distribution – the two series read from one input file
// ---------------------------------------------------------------------------

/// An observed distribution (in percent) paired with the actual one.
///
/// Both series are indexed by content position starting at 1. The two
/// lengths are expected to match but this is only checked when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    observed: Vec<f64>,
    actual: Vec<f64>,
}

impl Distribution {
    /// Pair an already-normalized observed series with the actual series.
    pub fn new(observed: Vec<f64>, actual: Vec<f64>) -> Self {
        Self { observed, actual }
    }

    /// Normalize raw observed counts to percentages and pair them with `actual`.
    pub fn from_counts(observed_counts: &[f64], actual: Vec<f64>) -> Result<Self, DistributionError> {
        Ok(Self::new(to_percentages(observed_counts)?, actual))
    }

    /// Observed frequencies in percent.
    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    /// Actual values, as read.
    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    /// Number of contents (length of the observed series).
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// The content index axis, `1..=N`.
    pub fn indices(&self) -> RangeInclusive<usize> {
        1..=self.observed.len()
    }

    pub fn observed_points(&self) -> Vec<(f64, f64)> {
        Self::points(&self.observed)
    }

    pub fn actual_points(&self) -> Vec<(f64, f64)> {
        Self::points(&self.actual)
    }

    fn points(values: &[f64]) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect()
    }

    /// Smallest and largest finite value across both series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.observed
            .iter()
            .chain(self.actual.iter())
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
