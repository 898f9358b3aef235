//! Python bindings for spectrum and response computation

use crate::response;
use crate::spectrum::{self, WindowType};
use num_complex::Complex64;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
        }
    }
}

/// Centered magnitude spectrum in dB
///
/// Args:
///     samples: Real input signal as numpy array
///     window_length: FFT size (truncates or zero-pads the signal)
///
/// Returns:
///     window_length levels in dB, 0 Hz at index window_length // 2
#[pyfunction]
#[pyo3(name = "compute_spectrum")]
pub fn py_compute_spectrum<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    window_length: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let spectrum = spectrum::compute_spectrum(samples.as_slice()?, window_length)?;
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Centered magnitude spectrum in dB of a complex signal
#[pyfunction]
#[pyo3(name = "compute_spectrum_complex")]
pub fn py_compute_spectrum_complex<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<Complex64>,
    window_length: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let spectrum = spectrum::compute_spectrum_complex(samples.as_slice()?, window_length)?;
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Centered magnitude spectrum in dB after tapering the signal
///
/// Args:
///     samples: Real input signal as numpy array
///     window_length: FFT size
///     window_type: Taper applied over the samples (default: Rectangular)
#[pyfunction]
#[pyo3(name = "compute_spectrum_windowed")]
#[pyo3(signature = (samples, window_length, window_type=PyWindowType::Rectangular))]
pub fn py_compute_spectrum_windowed<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    window_length: usize,
    window_type: PyWindowType,
) -> PyResult<&'py PyArray1<f64>> {
    let spectrum = spectrum::compute_spectrum_windowed(
        samples.as_slice()?,
        window_length,
        window_type.into(),
    )?;
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Bin frequencies in Hz matching compute_spectrum's layout
#[pyfunction]
#[pyo3(name = "fft_frequencies")]
pub fn py_fft_frequencies<'py>(
    py: Python<'py>,
    window_length: usize,
    fs: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let freqs = spectrum::fft_frequencies(window_length, fs)?;
    Ok(freqs.into_pyarray(py))
}

/// Frequency response of b/a on [0, pi)
///
/// Returns:
///     Tuple of (w, h): angular frequencies and complex response
#[pyfunction]
#[pyo3(name = "freqz")]
#[pyo3(signature = (b, a=None, n_points=512))]
pub fn py_freqz<'py>(
    py: Python<'py>,
    b: PyReadonlyArray1<f64>,
    a: Option<PyReadonlyArray1<f64>>,
    n_points: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<Complex64>)> {
    let response = match a {
        Some(a) => response::freqz(b.as_slice()?, a.as_slice()?, n_points)?,
        None => response::freqz(b.as_slice()?, &[1.0], n_points)?,
    };

    Ok((
        PyArray1::from_vec(py, response.w),
        PyArray1::from_vec(py, response.h),
    ))
}
