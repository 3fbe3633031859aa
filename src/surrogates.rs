//! Phase-randomized surrogate generation.
//!
//! A phase-randomized surrogate keeps the Fourier amplitude of the original
//! series at every frequency bin and replaces the phases with independent
//! uniform draws. The inverse transform then yields a new time-domain series
//! with the same power spectrum (hence the same autocorrelation structure)
//! but no meaningful temporal relationship to the original.
//!
//! Real-valuedness of the inverse requires Hermitian symmetry: bin `N−k` must
//! be the complex conjugate of bin `k`, and the bins that are their own
//! mirror image (DC, and Nyquist when N is even) carry no phase at all. Odd
//! and even N therefore take different construction paths; see
//! [`hermitian_spectrum`].

use crate::errors::{SurrogateError, SurrogateResult};
use crate::fft_ops;
use crate::rng::SurrogateRng;
use num_complex::Complex64;

/// Number of freely randomizable phase bins for a series of length `n`.
///
/// Bins `1..=free_phase_count(n)` take random phases; DC is fixed, and for
/// even `n` the Nyquist bin `n/2` is fixed as well.
pub fn free_phase_count(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

/// Draw `count` independent uniform phases in (−π, π].
pub fn random_phases(count: usize, rng: &mut SurrogateRng) -> Vec<f64> {
    (0..count).map(|_| rng.phase()).collect()
}

/// Assemble a Hermitian-symmetric complex spectrum from a magnitude profile
/// and free-bin phases.
///
/// `free_phases` must have exactly [`free_phase_count`]`(magnitudes.len())`
/// entries. Bin 0 gets phase 0; bins `1..=free` get the supplied phases; the
/// upper half mirrors the lower half with negated phase. For even N the
/// Nyquist bin is real-valued with phase 0.
pub fn hermitian_spectrum(
    magnitudes: &[f64],
    free_phases: &[f64],
) -> SurrogateResult<Vec<Complex64>> {
    let n = magnitudes.len();
    if n < 2 {
        return Err(SurrogateError::InsufficientData {
            required: 2,
            actual: n,
        });
    }
    let free = free_phase_count(n);
    if free_phases.len() != free {
        return Err(SurrogateError::ShapeMismatch {
            expected: free,
            actual: free_phases.len(),
        });
    }

    let mut spectrum = vec![Complex64::new(0.0, 0.0); n];
    spectrum[0] = Complex64::new(magnitudes[0], 0.0);

    for (k, &phi) in (1..=free).zip(free_phases.iter()) {
        spectrum[k] = Complex64::from_polar(magnitudes[k], phi);
        spectrum[n - k] = spectrum[k].conj();
    }

    if n % 2 == 0 {
        // Nyquist bin is its own conjugate mirror; it must stay real.
        spectrum[n / 2] = Complex64::new(magnitudes[n / 2], 0.0);
    }

    Ok(spectrum)
}

/// Generate one phase-randomized surrogate from a magnitude profile.
///
/// The output series' DFT magnitudes equal `magnitudes` to within the
/// round-trip error of the forward/inverse transform pair.
pub fn phase_randomized_surrogate(
    magnitudes: &[f64],
    rng: &mut SurrogateRng,
) -> SurrogateResult<Vec<f64>> {
    let phases = random_phases(free_phase_count(magnitudes.len()), rng);
    let spectrum = hermitian_spectrum(magnitudes, &phases)?;
    fft_ops::inverse_real(spectrum)
}

/// Generate one phase-randomized surrogate of a time-domain series.
///
/// Convenience wrapper: forward-transforms `data` for its magnitude profile,
/// then randomizes phases. When generating an ensemble from the same series,
/// compute [`fft_ops::magnitude_spectrum`] once and call
/// [`phase_randomized_surrogate`] per draw instead.
pub fn fourier_surrogate(data: &[f64], rng: &mut SurrogateRng) -> SurrogateResult<Vec<f64>> {
    let magnitudes = fft_ops::magnitude_spectrum(data)?;
    phase_randomized_surrogate(&magnitudes, rng)
}
