//! Axis helpers for spectra and time series

use crate::error::SpectrumError;
use ndarray::Array1;

/// Bin frequencies in Hz for a centered spectrum of `window_length` bins
///
/// Matches the layout produced by [`compute_spectrum`](super::compute_spectrum):
/// index `window_length / 2` is 0 Hz, bins below it are negative frequencies.
pub fn fft_frequencies(window_length: usize, fs: f64) -> Result<Array1<f64>, SpectrumError> {
    if window_length == 0 {
        return Err(SpectrumError::InvalidArgument(
            "window length must be a positive integer".to_string(),
        ));
    }
    check_rate(fs)?;

    let resolution = fs / window_length as f64;
    let center = (window_length / 2) as f64;

    Ok(Array1::from_shape_fn(window_length, |i| {
        (i as f64 - center) * resolution
    }))
}

/// Sample instants `n / fs` for `n = 0..len`
pub fn time_axis(len: usize, fs: f64) -> Result<Array1<f64>, SpectrumError> {
    check_rate(fs)?;
    Ok(Array1::from_shape_fn(len, |n| n as f64 / fs))
}

fn check_rate(fs: f64) -> Result<(), SpectrumError> {
    if !fs.is_finite() || fs <= 0.0 {
        return Err(SpectrumError::InvalidArgument(format!(
            "sampling rate must be positive and finite, got {}",
            fs
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length_layout() {
        let freqs = fft_frequencies(4, 8.0).unwrap();
        assert_eq!(freqs.to_vec(), vec![-4.0, -2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_odd_length_layout() {
        let freqs = fft_frequencies(5, 10.0).unwrap();
        assert_eq!(freqs.to_vec(), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_zero_is_at_center() {
        let freqs = fft_frequencies(1024, 48000.0).unwrap();
        assert_eq!(freqs[512], 0.0);
        assert!((freqs[0] + 24000.0).abs() < 1e-10);
    }

    #[test]
    fn test_time_axis() {
        let t = time_axis(4, 2.0).unwrap();
        assert_eq!(t.to_vec(), vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_invalid_rate() {
        assert!(time_axis(4, 0.0).is_err());
        assert!(fft_frequencies(4, f64::NAN).is_err());
        assert!(fft_frequencies(0, 100.0).is_err());
    }
}
