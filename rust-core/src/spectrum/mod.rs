//! Spectral magnitude computation

pub mod fft;
pub mod frequency;
pub mod magnitude;
pub mod windowing;

pub use fft::FftEngine;
pub use frequency::{fft_frequencies, time_axis};
pub use magnitude::{compute_spectrum, compute_spectrum_complex, compute_spectrum_windowed, fft_shift};
pub use windowing::{apply_window, generate_window, WindowType};
