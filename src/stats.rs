//! Scalar statistics shared across the crate.
//!
//! Standardization here uses the population (1/N) standard deviation. The
//! Pearson correlation is scale-invariant, so the convention only matters for
//! the amplitude-spectrum bookkeeping of the surrogate machinery, which
//! assumes unit population variance.

use crate::errors::{validate_equal_length, SurrogateError, SurrogateResult};

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (1/N denominator) via Welford's single-pass algorithm.
///
/// Welford's update avoids the catastrophic cancellation of the naive
/// sum-of-squares formula on data with a large mean.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &value) in data.iter().enumerate() {
        let count = (i + 1) as f64;
        let delta = value - mean;
        mean += delta / count;
        m2 += delta * (value - mean);
    }
    m2 / data.len() as f64
}

/// Shift and scale a series to zero mean and unit population variance.
///
/// Precondition: the series must not be constant. A zero-variance input
/// produces non-finite output (division by zero), which the correlation
/// primitive then rejects; this is a documented caller responsibility, not a
/// silently handled case.
pub fn standardize(data: &[f64]) -> Vec<f64> {
    let m = mean(data);
    let sd = population_variance(data).sqrt();
    data.iter().map(|&x| (x - m) / sd).collect()
}

/// Pearson correlation coefficient between two equal-length series.
///
/// # Errors
/// - [`SurrogateError::ShapeMismatch`] if lengths differ.
/// - [`SurrogateError::InsufficientData`] if fewer than 2 points.
/// - [`SurrogateError::NumericalError`] if either series has zero variance or
///   contains non-finite values (the denominator degenerates).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> SurrogateResult<f64> {
    validate_equal_length(x, y)?;
    let n = x.len();
    if n < 2 {
        return Err(SurrogateError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom <= 0.0 || !denom.is_finite() {
        return Err(SurrogateError::NumericalError {
            reason: "degenerate correlation: zero-variance or non-finite series".to_string(),
        });
    }

    let r = cov / denom;
    if !r.is_finite() {
        return Err(SurrogateError::NumericalError {
            reason: "non-finite correlation coefficient".to_string(),
        });
    }
    // Round-off can push a perfect correlation infinitesimally past ±1.
    Ok(r.clamp(-1.0, 1.0))
}

/// Sort a slice of f64 in ascending order, NaN values last.
pub fn sort_f64_slice(slice: &mut [f64]) {
    slice.sort_by(|a, b| match a.partial_cmp(b) {
        Some(ord) => ord,
        None => {
            if a.is_nan() && b.is_nan() {
                std::cmp::Ordering::Equal
            } else if a.is_nan() {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Less
            }
        }
    });
}

/// Value at percentile rank `rank` in (0, 1) of an ascending-sorted slice.
///
/// Uses the index `(rank * len)` truncated and clamped, so exactly a
/// `1 − rank` fraction of the sample sits strictly above the returned value
/// (up to discreteness).
pub fn percentile_of_sorted(sorted: &[f64], rank: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = (rank * sorted.len() as f64) as usize;
    sorted[idx.min(sorted.len() - 1)]
}
