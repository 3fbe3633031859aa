//! Blackman-Tukey smoothed periodogram and raw periodogram estimation.
//!
//! The raw periodogram is an inconsistent estimator: its variance does not
//! shrink as the series grows. The Blackman-Tukey approach trades resolution
//! for variance by tapering the autocorrelation sequence with a lag window
//! before transforming, which is equivalent to smoothing the periodogram in
//! frequency.

use crate::errors::{
    validate_all_finite, validate_data_length, SurrogateError, SurrogateResult,
};
use crate::fft_ops::{cached_fft_forward, fft_autocorrelation};
use crate::stats;
use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Lag window applied to the autocorrelation sequence before transforming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LagWindow {
    /// Triangular taper; guarantees a non-negative spectral estimate
    Bartlett,
    /// Raised cosine reaching zero at the truncation lag
    Hann,
    /// Raised cosine with a 0.54/0.46 pedestal
    Hamming,
}

impl LagWindow {
    /// Window weight at lag `k` for truncation lag `max_lag`.
    fn weight(&self, k: usize, max_lag: usize) -> f64 {
        let frac = k as f64 / max_lag as f64;
        match self {
            LagWindow::Bartlett => 1.0 - frac,
            LagWindow::Hann => 0.5 * (1.0 + (PI * frac).cos()),
            LagWindow::Hamming => 0.54 + 0.46 * (PI * frac).cos(),
        }
    }
}

/// A one-sided power spectral density estimate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralEstimate {
    /// Frequencies in cycles per sample, from 0 to 0.5 (Nyquist)
    pub frequencies: Vec<f64>,
    /// Power spectral density at each frequency
    pub power: Vec<f64>,
}

/// Blackman-Tukey smoothed periodogram.
///
/// Computes the biased autocovariance to `max_lag`, tapers it with `window`,
/// and evaluates the cosine series
/// `S(f) = c₀ + 2·Σₖ w(k)·cₖ·cos(2πfk)` at the Fourier frequencies
/// `f_j = j/N` for `j = 0..=N/2`.
///
/// Smaller `max_lag` gives a smoother, lower-variance estimate at the cost of
/// frequency resolution; `max_lag` near N approaches the raw periodogram. A
/// common starting point is N/3.
///
/// # Errors
/// - [`SurrogateError::InsufficientData`] if N < 4.
/// - [`SurrogateError::InvalidParameter`] if `max_lag` is 0 or ≥ N.
/// - [`SurrogateError::NumericalError`] for non-finite or constant input.
pub fn blackman_tukey(
    data: &[f64],
    max_lag: usize,
    window: LagWindow,
) -> SurrogateResult<SpectralEstimate> {
    let n = data.len();
    validate_data_length(data, 4, "Blackman-Tukey periodogram")?;
    validate_all_finite(data, "spectral input")?;
    if max_lag == 0 || max_lag >= n {
        return Err(SurrogateError::InvalidParameter {
            parameter: "max_lag".to_string(),
            value: max_lag as f64,
            constraint: format!("must be in [1, {})", n),
        });
    }

    let variance = stats::population_variance(data);
    if variance <= 0.0 {
        return Err(SurrogateError::NumericalError {
            reason: "zero-variance series in spectral estimation".to_string(),
        });
    }

    // Autocovariance = normalized ACF scaled back by the variance.
    let acf = fft_autocorrelation(data, max_lag)?;
    let autocov: Vec<f64> = acf.iter().map(|r| r * variance).collect();

    let half = n / 2;
    let mut frequencies = Vec::with_capacity(half + 1);
    let mut power = Vec::with_capacity(half + 1);
    for j in 0..=half {
        let f = j as f64 / n as f64;
        let mut s = autocov[0];
        for (k, &c) in autocov.iter().enumerate().skip(1) {
            s += 2.0 * window.weight(k, max_lag) * c * (2.0 * PI * f * k as f64).cos();
        }
        // Hann/Hamming tapers can push near-zero densities slightly negative.
        if s < 0.0 {
            log::debug!("clamping negative spectral density {:.3e} at f = {:.4}", s, f);
            s = 0.0;
        }
        frequencies.push(f);
        power.push(s);
    }

    Ok(SpectralEstimate { frequencies, power })
}

/// Raw (unsmoothed) periodogram, |DFT|²/N at the Fourier frequencies.
///
/// The mean is removed first so trend-free power does not leak into the DC
/// bin. Returned one-sided: bins `0..=N/2`.
pub fn raw_periodogram(data: &[f64]) -> SurrogateResult<SpectralEstimate> {
    let n = data.len();
    validate_data_length(data, 4, "periodogram")?;
    validate_all_finite(data, "periodogram input")?;

    let mean = stats::mean(data);
    let mut buffer: Vec<Complex64> = data
        .iter()
        .map(|&x| Complex64::new(x - mean, 0.0))
        .collect();
    let fft = cached_fft_forward(n)?;
    fft.process(&mut buffer);

    let half = n / 2;
    let frequencies: Vec<f64> = (0..=half).map(|j| j as f64 / n as f64).collect();
    let power: Vec<f64> = buffer[..=half]
        .iter()
        .map(|c| c.norm_sqr() / n as f64)
        .collect();

    Ok(SpectralEstimate { frequencies, power })
}
