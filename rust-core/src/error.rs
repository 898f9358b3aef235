//! Error types for spectral computation and rendering

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Series {index} has mismatched lengths (x: {x_len}, y: {y_len})")]
    MismatchedSeries {
        index: usize,
        x_len: usize,
        y_len: usize,
    },

    #[error("Expected {expected} entries for {what}, found {found}")]
    MismatchedCount {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unknown line style '{0}' (expected continuous, discrete or dash)")]
    InvalidStyle(String),

    #[error("Invalid axis range: {0}")]
    InvalidAxis(String),

    #[error("Failed to render figure: {0}")]
    Render(String),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}
