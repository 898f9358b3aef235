//! PyO3 bindings for Python integration

use crate::error::{PlotError, SpectrumError};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

mod plot_bindings;
mod spectrum_bindings;

impl From<SpectrumError> for PyErr {
    fn from(err: SpectrumError) -> PyErr {
        match err {
            SpectrumError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            SpectrumError::Fft(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

impl From<PlotError> for PyErr {
    fn from(err: PlotError) -> PyErr {
        match &err {
            PlotError::Render(_) => PyRuntimeError::new_err(err.to_string()),
            PlotError::Spectrum(inner) => inner.clone().into(),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn signal_helpers(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_compute_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_compute_spectrum_complex, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_compute_spectrum_windowed, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_fft_frequencies, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::py_freqz, m)?)?;

    m.add_function(wrap_pyfunction!(plot_bindings::py_plot_timeseries, m)?)?;
    m.add_function(wrap_pyfunction!(plot_bindings::py_plot_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(plot_bindings::py_plot_filter_response, m)?)?;

    m.add_class::<spectrum_bindings::PyWindowType>()?;

    Ok(())
}
