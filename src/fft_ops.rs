//! FFT primitives shared by surrogate generation and spectral estimation.
//!
//! Planning a transform with `rustfft` is much more expensive than executing
//! one, and a surrogate ensemble runs thousands of transforms of a single
//! size. Plans are therefore cached process-wide in an LRU keyed by size and
//! direction.

use crate::errors::{validate_all_finite, SurrogateError, SurrogateResult};
use crate::stats;
use lru::LruCache;
use num_complex::Complex64;
use once_cell::sync::Lazy;
use rustfft::{Fft, FftPlanner};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Maximum supported transform size (guards against runaway allocations).
pub const MAX_FFT_SIZE: usize = 1 << 26;

/// Number of distinct plans retained in the cache.
const FFT_CACHE_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PlanKey {
    size: usize,
    forward: bool,
}

static FFT_PLAN_CACHE: Lazy<Mutex<LruCache<PlanKey, Arc<dyn Fft<f64>>>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(FFT_CACHE_CAPACITY).unwrap())));

fn cached_plan(size: usize, forward: bool) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    if size == 0 || size > MAX_FFT_SIZE {
        return Err(SurrogateError::FftError { size });
    }

    let key = PlanKey { size, forward };

    let mut cache = match FFT_PLAN_CACHE.lock() {
        Ok(guard) => guard,
        // A poisoned cache still holds valid plans.
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Some(plan) = cache.get(&key) {
        return Ok(plan.clone());
    }

    let mut planner = FftPlanner::new();
    let plan = if forward {
        planner.plan_fft_forward(size)
    } else {
        planner.plan_fft_inverse(size)
    };
    cache.put(key, plan.clone());
    Ok(plan)
}

/// Get a cached forward FFT plan for the given size.
pub fn cached_fft_forward(size: usize) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    cached_plan(size, true)
}

/// Get a cached inverse FFT plan for the given size.
pub fn cached_fft_inverse(size: usize) -> SurrogateResult<Arc<dyn Fft<f64>>> {
    cached_plan(size, false)
}

/// Forward DFT of a real series, returned as complex bins of length N.
pub fn forward_transform(data: &[f64]) -> SurrogateResult<Vec<Complex64>> {
    validate_all_finite(data, "fft input")?;
    let n = data.len();
    let fft = cached_fft_forward(n)?;
    let mut buffer: Vec<Complex64> = data.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buffer);
    Ok(buffer)
}

/// Magnitude of the DFT of a real series, one value per frequency bin.
///
/// This is the amplitude profile that phase-randomized surrogates preserve
/// exactly; only the phase information is discarded.
pub fn magnitude_spectrum(data: &[f64]) -> SurrogateResult<Vec<f64>> {
    Ok(forward_transform(data)?.iter().map(|c| c.norm()).collect())
}

/// Inverse DFT of a complex spectrum, returning the real part.
///
/// `rustfft` does not normalize, so the inverse is scaled by 1/N here. For a
/// Hermitian-symmetric spectrum the imaginary parts of the inverse are
/// round-off noise and are dropped.
pub fn inverse_real(spectrum: Vec<Complex64>) -> SurrogateResult<Vec<f64>> {
    let n = spectrum.len();
    let fft = cached_fft_inverse(n)?;
    let mut buffer = spectrum;
    fft.process(&mut buffer);
    let scale = 1.0 / n as f64;
    Ok(buffer.iter().map(|c| c.re * scale).collect())
}

/// Biased autocorrelation function via zero-padded FFT, lags 0..=`max_lag`.
///
/// The biased (1/N) estimator keeps the autocorrelation sequence positive
/// semi-definite, which is what smoothed-periodogram spectral estimation
/// requires. Output is normalized so that lag 0 equals 1.
pub fn fft_autocorrelation(data: &[f64], max_lag: usize) -> SurrogateResult<Vec<f64>> {
    let n = data.len();
    if n < 2 {
        return Err(SurrogateError::InsufficientData {
            required: 2,
            actual: n,
        });
    }
    if max_lag >= n {
        return Err(SurrogateError::InvalidParameter {
            parameter: "max_lag".to_string(),
            value: max_lag as f64,
            constraint: format!("must be < series length {}", n),
        });
    }
    validate_all_finite(data, "autocorrelation input")?;

    let mean = stats::mean(data);

    // Pad to at least 2N so the circular convolution equals the linear one.
    let padded_len = (2 * n).next_power_of_two();
    let mut buffer = vec![Complex64::new(0.0, 0.0); padded_len];
    for (slot, &x) in buffer.iter_mut().zip(data.iter()) {
        *slot = Complex64::new(x - mean, 0.0);
    }

    let fft = cached_fft_forward(padded_len)?;
    fft.process(&mut buffer);
    for c in buffer.iter_mut() {
        *c = Complex64::new(c.norm_sqr(), 0.0);
    }
    let ifft = cached_fft_inverse(padded_len)?;
    ifft.process(&mut buffer);

    let c0 = buffer[0].re / padded_len as f64 / n as f64;
    if c0 <= 0.0 || !c0.is_finite() {
        return Err(SurrogateError::NumericalError {
            reason: "zero-variance series in autocorrelation".to_string(),
        });
    }

    let acf: Vec<f64> = (0..=max_lag)
        .map(|k| (buffer[k].re / padded_len as f64 / n as f64) / c0)
        .collect();
    Ok(acf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_inverse_roundtrip() {
        let data = vec![1.0, -0.5, 2.0, 0.25, -1.5, 3.0, 0.0];
        let spectrum = forward_transform(&data).unwrap();
        let recovered = inverse_real(spectrum).unwrap();
        for (orig, rec) in data.iter().zip(recovered.iter()) {
            assert!((orig - rec).abs() < 1e-12, "{} vs {}", orig, rec);
        }
    }

    #[test]
    fn test_magnitude_spectrum_constant() {
        // A constant series has all power in the DC bin.
        let data = vec![2.0; 8];
        let mags = magnitude_spectrum(&data).unwrap();
        assert!((mags[0] - 16.0).abs() < 1e-12);
        for &m in &mags[1..] {
            assert!(m.abs() < 1e-10);
        }
    }

    #[test]
    fn test_magnitude_spectrum_sine() {
        let n = 64;
        let freq_bin = 5;
        let data: Vec<f64> = (0..n)
            .map(|t| (2.0 * std::f64::consts::PI * freq_bin as f64 * t as f64 / n as f64).sin())
            .collect();
        let mags = magnitude_spectrum(&data).unwrap();

        // Power concentrates in bins freq_bin and n - freq_bin.
        assert!(mags[freq_bin] > 10.0);
        assert!(mags[n - freq_bin] > 10.0);
        assert!(mags[1] < 1e-9);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            cached_fft_forward(0),
            Err(SurrogateError::FftError { size: 0 })
        ));
    }

    #[test]
    fn test_autocorrelation_lag_zero_is_one() {
        let data: Vec<f64> = (0..100).map(|i| ((i * 37) % 11) as f64).collect();
        let acf = fft_autocorrelation(&data, 10).unwrap();
        assert_eq!(acf.len(), 11);
        assert!((acf[0] - 1.0).abs() < 1e-10);
        for &r in &acf {
            assert!(r.abs() <= 1.0 + 1e-10);
        }
    }

    #[test]
    fn test_autocorrelation_ar1_sign() {
        // Strongly persistent series should have a large positive lag-1 ACF.
        let mut data = vec![0.0; 256];
        let mut rng = crate::rng::SurrogateRng::with_seed(11);
        for t in 1..data.len() {
            data[t] = 0.9 * data[t - 1] + rng.standard_normal();
        }
        let acf = fft_autocorrelation(&data, 2).unwrap();
        assert!(acf[1] > 0.6, "lag-1 acf = {}", acf[1]);
    }

    #[test]
    fn test_autocorrelation_invalid_lag() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            fft_autocorrelation(&data, 3),
            Err(SurrogateError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_autocorrelation_constant_series() {
        let data = vec![5.0; 32];
        assert!(matches!(
            fft_autocorrelation(&data, 4),
            Err(SurrogateError::NumericalError { .. })
        ));
    }
}
