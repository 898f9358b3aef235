//! Centered, decibel-scaled magnitude spectra
//!
//! The level of every bin is `10*log10(|X[k]| / L)` where `L` is the number
//! of samples the caller passed in, not the transform size. Zero-padding
//! therefore does not rescale the spectrum.

use super::fft::FftEngine;
use super::windowing::{apply_window, WindowType};
use crate::error::SpectrumError;
use num_complex::Complex64;

/// Rotate a natural-order spectrum so the zero-frequency bin sits at `len / 2`
///
/// Equivalent to numpy's `fftshift` for one axis.
pub fn fft_shift<T: Clone>(spectrum: &[T]) -> Vec<T> {
    let mut shifted = spectrum.to_vec();
    shifted.rotate_right(spectrum.len() / 2);
    shifted
}

/// Compute the centered magnitude spectrum of a real signal in dB
///
/// # Arguments
/// * `samples` - Input signal (non-empty)
/// * `window_length` - Transform size; truncates or zero-pads `samples`
///
/// # Returns
/// `window_length` values in dB, zero frequency at index `window_length / 2`.
/// Bins with exactly zero magnitude come out as `-inf`.
pub fn compute_spectrum(samples: &[f64], window_length: usize) -> Result<Vec<f64>, SpectrumError> {
    check_samples(samples.len())?;

    let mut engine = FftEngine::new(window_length)?;
    let transform = engine.transform_real(samples)?;

    Ok(to_centered_db(&transform, samples.len()))
}

/// Complex-input counterpart of [`compute_spectrum`]
pub fn compute_spectrum_complex(
    samples: &[Complex64],
    window_length: usize,
) -> Result<Vec<f64>, SpectrumError> {
    check_samples(samples.len())?;

    let engine = FftEngine::new(window_length)?;
    let transform = engine.transform_complex(samples);

    Ok(to_centered_db(&transform, samples.len()))
}

/// Taper `samples` with `window` before computing the spectrum
///
/// The taper spans the whole input, not the transform size.
pub fn compute_spectrum_windowed(
    samples: &[f64],
    window_length: usize,
    window: WindowType,
) -> Result<Vec<f64>, SpectrumError> {
    check_samples(samples.len())?;

    let windowed = apply_window(samples, window);
    compute_spectrum(&windowed, window_length)
}

fn check_samples(len: usize) -> Result<(), SpectrumError> {
    if len == 0 {
        return Err(SpectrumError::InvalidArgument(
            "samples must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn to_centered_db(transform: &[Complex64], sample_count: usize) -> Vec<f64> {
    let scale = sample_count as f64;

    fft_shift(transform)
        .iter()
        .map(|bin| 10.0 * (bin.norm() / scale).log10())
        .collect()
}
