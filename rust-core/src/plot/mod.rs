//! Chart rendering with plotters
//!
//! Each chart has a `draw_*` form that targets any plotters drawing area and
//! a `plot_*` form that writes an SVG file.

mod canvas;
pub mod config;
pub mod response;
pub mod spectrum;
pub mod style;
pub mod timeseries;

pub use config::{FigureConfig, ResponsePlotConfig, SpectrumPlotConfig, TimeseriesConfig};
pub use response::{draw_filter_response, plot_filter_response};
pub use spectrum::{draw_spectrum, plot_spectrum};
pub use style::{LineStyle, Series};
pub use timeseries::{draw_timeseries, plot_timeseries};
