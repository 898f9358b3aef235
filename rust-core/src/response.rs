//! Frequency response evaluation of a given transfer function
//!
//! H(e^jω) = B(e^jω) / A(e^jω) evaluated on `n` equally spaced points of [0, π)

use crate::error::SpectrumError;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Sampled frequency response
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Angular frequencies in rad/sample
    pub w: Vec<f64>,

    /// Complex response at each `w`
    pub h: Vec<Complex64>,
}

impl FrequencyResponse {
    /// Frequencies in Hz: `0.5 * fs * w / π`
    pub fn frequencies_hz(&self, fs: f64) -> Vec<f64> {
        angular_to_hz(&self.w, fs)
    }

    /// Gain in dB: `20 * log10(|h|)`
    pub fn gain_db(&self) -> Vec<f64> {
        gain_db(&self.h)
    }
}

/// Evaluate the response of the filter with numerator `b` and denominator `a`
///
/// # Arguments
/// * `b` - Numerator coefficients (FIR taps when `a == [1.0]`)
/// * `a` - Denominator coefficients, `a[0]` must be non-zero
/// * `n_points` - Number of frequencies on [0, π)
pub fn freqz(b: &[f64], a: &[f64], n_points: usize) -> Result<FrequencyResponse, SpectrumError> {
    if b.is_empty() || a.is_empty() {
        return Err(SpectrumError::InvalidArgument(
            "numerator and denominator must be non-empty".to_string(),
        ));
    }
    if a[0] == 0.0 {
        return Err(SpectrumError::InvalidArgument(
            "leading denominator coefficient must be non-zero".to_string(),
        ));
    }
    if n_points == 0 {
        return Err(SpectrumError::InvalidArgument(
            "number of frequency points must be positive".to_string(),
        ));
    }

    let mut w = Vec::with_capacity(n_points);
    let mut h = Vec::with_capacity(n_points);

    for i in 0..n_points {
        let omega = PI * i as f64 / n_points as f64;
        let z_inv = Complex64::from_polar(1.0, -omega);

        w.push(omega);
        h.push(evaluate_polynomial(b, z_inv) / evaluate_polynomial(a, z_inv));
    }

    Ok(FrequencyResponse { w, h })
}

/// Convert angular frequencies (rad/sample) to Hz
pub fn angular_to_hz(w: &[f64], fs: f64) -> Vec<f64> {
    w.iter().map(|&omega| 0.5 * fs * omega / PI).collect()
}

/// Magnitude of a complex response in dB
pub fn gain_db(h: &[Complex64]) -> Vec<f64> {
    h.iter().map(|c| 20.0 * c.norm().log10()).collect()
}

// Σ c[n] * z^-n
fn evaluate_polynomial(coefficients: &[f64], z_inv: Complex64) -> Complex64 {
    let mut sum = Complex64::new(0.0, 0.0);
    let mut power = Complex64::new(1.0, 0.0);

    for &c in coefficients {
        sum += power * c;
        power *= z_inv;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_filter_is_flat() {
        let response = freqz(&[1.0], &[1.0], 64).unwrap();

        assert_eq!(response.w.len(), 64);
        assert_eq!(response.h.len(), 64);
        for h in &response.h {
            assert!((h.norm() - 1.0).abs() < 1e-12);
        }
        assert!(response.gain_db().iter().all(|g| g.abs() < 1e-10));
    }

    #[test]
    fn test_grid_excludes_nyquist() {
        let response = freqz(&[1.0], &[1.0], 4).unwrap();
        let expected = [0.0, PI / 4.0, PI / 2.0, 3.0 * PI / 4.0];

        for (w, e) in response.w.iter().zip(expected.iter()) {
            assert!((w - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_moving_average_response() {
        // Two-tap average: H = (1 + e^-jω) / 2, null at Nyquist
        let response = freqz(&[0.5, 0.5], &[1.0], 8).unwrap();

        assert!((response.h[0].norm() - 1.0).abs() < 1e-12);
        // |H(π/2)| = cos(π/4)
        assert!((response.h[4].norm() - (PI / 4.0).cos()).abs() < 1e-12);
    }

    #[test]
    fn test_one_pole_lowpass_dc_gain() {
        // y[n] = x[n] + 0.5 y[n-1] -> DC gain 2
        let response = freqz(&[1.0], &[1.0, -0.5], 16).unwrap();
        assert!((response.h[0].re - 2.0).abs() < 1e-12);
        assert!(response.h[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_frequencies_hz() {
        let response = freqz(&[1.0], &[1.0], 4).unwrap();
        let hz = response.frequencies_hz(8000.0);
        assert_eq!(hz.len(), 4);
        assert!((hz[2] - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(freqz(&[], &[1.0], 8).is_err());
        assert!(freqz(&[1.0], &[], 8).is_err());
        assert!(freqz(&[1.0], &[0.0, 1.0], 8).is_err());
        assert!(freqz(&[1.0], &[1.0], 0).is_err());
    }
}
