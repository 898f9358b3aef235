//! Python bindings for chart rendering

use crate::error::PlotError;
use crate::plot::{self, LineStyle, Series};
use num_complex::Complex64;
use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

/// Plot several time series on one axis and write an SVG
///
/// Args:
///     path: Output SVG path
///     title: Chart title
///     x: List of time axes
///     y: List of amplitude arrays
///     line: Style per series ("continuous", "discrete", "dash");
///         missing entries draw continuous
#[pyfunction]
#[pyo3(name = "plot_timeseries")]
#[pyo3(signature = (path, title, x, y, line=None))]
pub fn py_plot_timeseries(
    path: &str,
    title: &str,
    x: Vec<PyReadonlyArray1<f64>>,
    y: Vec<PyReadonlyArray1<f64>>,
    line: Option<Vec<String>>,
) -> PyResult<()> {
    if x.len() != y.len() {
        return Err(PlotError::MismatchedCount {
            what: "y arrays",
            expected: x.len(),
            found: y.len(),
        }
        .into());
    }

    let styles = line
        .unwrap_or_default()
        .iter()
        .map(|s| s.parse::<LineStyle>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut series = Vec::with_capacity(x.len());
    for (index, (xs, ys)) in x.iter().zip(y.iter()).enumerate() {
        let style = styles.get(index).copied().unwrap_or_default();
        series.push(Series::new(xs.as_slice()?, ys.as_slice()?).with_style(style));
    }

    plot::plot_timeseries(path, title, &series, &Default::default())?;
    Ok(())
}

/// Plot the positive half of centered spectra and write an SVG
///
/// Args:
///     path: Output SVG path
///     freqs: List of centered frequency axes (Hz)
///     fft_signal: List of spectra in dB
///     fs: Sampling rate in Hz
///     title: Chart title
///     label: Optional legend entry per spectrum
#[pyfunction]
#[pyo3(name = "plot_spectrum")]
#[pyo3(signature = (path, freqs, fft_signal, fs, title, label=None))]
pub fn py_plot_spectrum(
    path: &str,
    freqs: Vec<PyReadonlyArray1<f64>>,
    fft_signal: Vec<PyReadonlyArray1<f64>>,
    fs: f64,
    title: &str,
    label: Option<Vec<String>>,
) -> PyResult<()> {
    let freqs = freqs
        .iter()
        .map(|f| f.as_slice())
        .collect::<Result<Vec<_>, _>>()?;
    let spectra = fft_signal
        .iter()
        .map(|s| s.as_slice())
        .collect::<Result<Vec<_>, _>>()?;
    let labels: Option<Vec<&str>> = label
        .as_ref()
        .map(|l| l.iter().map(String::as_str).collect());

    plot::plot_spectrum(
        path,
        &freqs,
        &spectra,
        fs,
        title,
        labels.as_deref(),
        &Default::default(),
    )?;
    Ok(())
}

/// Plot a filter's gain in dB against frequency in Hz and write an SVG
///
/// Args:
///     path: Output SVG path
///     fs: Sampling rate in Hz
///     w: Angular frequencies (rad/sample)
///     h: Complex response
///     title: Chart title
///     xlim: Upper frequency limit (default: fs / 2)
#[pyfunction]
#[pyo3(name = "plot_filter_response")]
#[pyo3(signature = (path, fs, w, h, title, xlim=None))]
pub fn py_plot_filter_response(
    path: &str,
    fs: f64,
    w: PyReadonlyArray1<f64>,
    h: PyReadonlyArray1<Complex64>,
    title: &str,
    xlim: Option<f64>,
) -> PyResult<()> {
    plot::plot_filter_response(
        path,
        fs,
        w.as_slice()?,
        h.as_slice()?,
        title,
        xlim,
        &Default::default(),
    )?;
    Ok(())
}
