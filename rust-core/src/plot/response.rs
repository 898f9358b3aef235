//! Filter gain against frequency in Hz

use super::canvas::{build_chart, finish, svg_root, visible_runs, RenderResultExt};
use super::config::ResponsePlotConfig;
use crate::error::PlotError;
use crate::response::{angular_to_hz, gain_db};
use num_complex::Complex64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Draw `20*log10(|h|)` against `0.5 * fs * w / π`
///
/// # Arguments
/// * `fs` - Sampling rate in Hz
/// * `w` - Angular frequencies in rad/sample, as returned by [`freqz`](crate::freqz)
/// * `h` - Complex response at each `w`
/// * `x_limit` - Upper end of the frequency axis, `fs / 2` when `None`
pub fn draw_filter_response<DB>(
    root: &DrawingArea<DB, Shift>,
    fs: f64,
    w: &[f64],
    h: &[Complex64],
    title: &str,
    x_limit: Option<f64>,
    config: &ResponsePlotConfig,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if w.len() != h.len() {
        return Err(PlotError::MismatchedSeries {
            index: 0,
            x_len: w.len(),
            y_len: h.len(),
        });
    }

    let hz = angular_to_hz(w, fs);
    let gain = gain_db(h);

    let x_range = 0.0..x_limit.unwrap_or(fs / 2.0);
    let y_range = config.y_range.0..config.y_range.1;

    let mut chart = build_chart(
        root,
        title,
        &config.figure,
        x_range.clone(),
        y_range.clone(),
        "Frequency (Hz)",
        "Gain (dB)",
    )?;

    let style = Palette99::pick(0).stroke_width(2);
    for run in visible_runs(&hz, &gain, &x_range, &y_range) {
        chart.draw_series(LineSeries::new(run, style)).render()?;
    }

    Ok(())
}

/// Render a filter-response chart to an SVG file
pub fn plot_filter_response<P: AsRef<Path>>(
    path: P,
    fs: f64,
    w: &[f64],
    h: &[Complex64],
    title: &str,
    x_limit: Option<f64>,
    config: &ResponsePlotConfig,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    let root = svg_root(path, &config.figure)?;
    draw_filter_response(&root, fs, w, h, title, x_limit, config)?;
    finish(root, path)
}
