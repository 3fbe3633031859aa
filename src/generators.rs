//! Synthetic series generators for calibration and testing.
//!
//! The surrogate test is calibrated against processes with known structure:
//! white noise (no autocorrelation, the naive p-value is valid) and AR(1)
//! (serial correlation inflates apparent significance). These generators
//! exist so that calibration is reproducible from a seed.

use crate::errors::{SurrogateError, SurrogateResult};
use crate::rng::SurrogateRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common parameters for synthetic series generation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Length of the generated series
    pub length: usize,
    /// Random seed for reproducible generation; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 1000,
            seed: None,
        }
    }
}

fn make_rng(config: &GeneratorConfig) -> SurrogateRng {
    match config.seed {
        Some(seed) => SurrogateRng::with_seed(seed),
        None => SurrogateRng::from_entropy(),
    }
}

/// Generate i.i.d. standard normal white noise.
pub fn generate_white_noise(config: &GeneratorConfig) -> SurrogateResult<Vec<f64>> {
    if config.length == 0 {
        return Err(SurrogateError::InvalidParameter {
            parameter: "length".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        });
    }
    let mut rng = make_rng(config);
    Ok((0..config.length).map(|_| rng.standard_normal()).collect())
}

/// Generate a stationary AR(1) process `x[t] = phi·x[t−1] + ε[t]` with unit
/// innovation variance.
///
/// The first value is drawn from the stationary distribution
/// (variance 1/(1−φ²)), so there is no burn-in transient.
///
/// # Errors
/// [`SurrogateError::InvalidParameter`] unless |phi| < 1 (stationarity) and
/// `length` ≥ 1.
pub fn generate_ar1(config: &GeneratorConfig, phi: f64) -> SurrogateResult<Vec<f64>> {
    if config.length == 0 {
        return Err(SurrogateError::InvalidParameter {
            parameter: "length".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        });
    }
    if !phi.is_finite() || phi.abs() >= 1.0 {
        return Err(SurrogateError::InvalidParameter {
            parameter: "phi".to_string(),
            value: phi,
            constraint: "|phi| < 1 for stationarity".to_string(),
        });
    }

    let mut rng = make_rng(config);
    let mut series = Vec::with_capacity(config.length);
    series.push(rng.standard_normal() / (1.0 - phi * phi).sqrt());
    for t in 1..config.length {
        let innovation = rng.standard_normal();
        series.push(phi * series[t - 1] + innovation);
    }
    Ok(series)
}
