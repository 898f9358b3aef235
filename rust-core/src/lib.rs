//! Signal Helpers - spectra and charts for exploring sampled signals
//!
//! Centered dB magnitude spectra, filter frequency responses, and SVG charts
//! of time series, spectra and responses, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod plot;
pub mod response;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{PlotError, SpectrumError};
pub use plot::{plot_filter_response, plot_spectrum, plot_timeseries, LineStyle, Series};
pub use response::{freqz, FrequencyResponse};
pub use spectrum::{compute_spectrum, compute_spectrum_complex, fft_frequencies, WindowType};
