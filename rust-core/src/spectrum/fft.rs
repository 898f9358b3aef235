//! FFT engine sized to a fixed transform length
//!
//! Real input goes through realfft and the negative-frequency half is rebuilt
//! from Hermitian symmetry; complex input goes through rustfft directly.

use crate::error::SpectrumError;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Forward DFT planned for one transform size
pub struct FftEngine {
    /// FFT size (number of output bins)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Complex FFT processor
    c2c: Arc<dyn Fft<f64>>,

    /// Reusable real input buffer
    input_buffer: Vec<f64>,

    /// Reusable half spectrum (fft_size/2 + 1 bins)
    half_spectrum: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - Transform size; input is truncated or zero-padded to it
    pub fn new(fft_size: usize) -> Result<Self, SpectrumError> {
        if fft_size == 0 {
            return Err(SpectrumError::InvalidArgument(
                "window length must be a positive integer".to_string(),
            ));
        }

        log::debug!("planning forward FFT of size {}", fft_size);

        let mut real_planner = RealFftPlanner::<f64>::new();
        let r2c = real_planner.plan_fft_forward(fft_size);

        let mut planner = FftPlanner::<f64>::new();
        let c2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let half_spectrum = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            c2c,
            input_buffer,
            half_spectrum,
        })
    }

    /// Full `fft_size`-point DFT of a real signal
    ///
    /// # Returns
    /// X[k] for k = 0..fft_size, natural (unshifted) order
    pub fn transform_real(&mut self, signal: &[f64]) -> Result<Vec<Complex64>, SpectrumError> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.half_spectrum)
            .map_err(|e| SpectrumError::Fft(e.to_string()))?;

        let n = self.fft_size;
        let mut full = Vec::with_capacity(n);
        full.extend_from_slice(&self.half_spectrum);
        // X[n-k] = conj(X[k]) for real input
        for k in self.half_spectrum.len()..n {
            full.push(self.half_spectrum[n - k].conj());
        }

        Ok(full)
    }

    /// Full `fft_size`-point DFT of a complex signal
    pub fn transform_complex(&self, signal: &[Complex64]) -> Vec<Complex64> {
        let copy_len = signal.len().min(self.fft_size);
        let mut buffer = vec![Complex64::new(0.0, 0.0); self.fft_size];
        buffer[..copy_len].copy_from_slice(&signal[..copy_len]);

        self.c2c.process(&mut buffer);

        buffer
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            FftEngine::new(0),
            Err(SpectrumError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_alternating_signal() {
        let mut engine = FftEngine::new(4).unwrap();
        let spectrum = engine.transform_real(&[1.0, -1.0, 1.0, -1.0]).unwrap();

        let expected = [0.0, 0.0, 4.0, 0.0];
        for (bin, &want) in spectrum.iter().zip(expected.iter()) {
            assert!((bin.re - want).abs() < 1e-10);
            assert!(bin.im.abs() < 1e-10);
        }
    }

    #[test]
    fn test_real_matches_complex() {
        let signal: Vec<f64> = (0..13).map(|n| (0.7 * n as f64).sin() + 0.25).collect();
        let complex: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();

        for size in [5, 13, 16, 31] {
            let mut engine = FftEngine::new(size).unwrap();
            let real_out = engine.transform_real(&signal).unwrap();
            let complex_out = engine.transform_complex(&complex);

            assert_eq!(real_out.len(), size);
            for (a, b) in real_out.iter().zip(complex_out.iter()) {
                assert!((a - b).norm() < 1e-9, "size {}: {} vs {}", size, a, b);
            }
        }
    }

    #[test]
    fn test_buffer_reuse_clears_padding() {
        let mut engine = FftEngine::new(8).unwrap();
        engine.transform_real(&[5.0; 8]).unwrap();

        // Shorter second call must not see stale samples
        let dc = engine.transform_real(&[1.0, 1.0]).unwrap()[0];
        assert!((dc.re - 2.0).abs() < 1e-10);
    }
}
