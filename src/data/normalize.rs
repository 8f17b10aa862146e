use super::error::DistributionError;

// ---------------------------------------------------------------------------
// Percentage normalization
// ---------------------------------------------------------------------------

/// Express raw counts as percentages of their own total.
///
/// Each value `v` maps to `(v / total) * 100.0`, so the result sums to 100
/// (up to rounding). A zero or non-finite total has no meaningful percentage
/// split and is rejected.
pub fn to_percentages(raw: &[f64]) -> Result<Vec<f64>, DistributionError> {
    let total: f64 = raw.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return Err(DistributionError::DegenerateInput { total });
    }
    Ok(raw.iter().map(|&v| (v / total) * 100.0).collect())
}

/// Sum of a sequence; for percentage data this should be close to 100.
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}
