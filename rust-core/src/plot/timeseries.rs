//! Several time series on one amplitude axis

use super::canvas::{
    build_chart, check_lengths, data_range, finish, svg_root, visible_runs, Chart,
    RenderResultExt,
};
use super::config::TimeseriesConfig;
use super::style::{LineStyle, Series};
use crate::error::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;

const STEM_MARKER_RADIUS: u32 = 3;
const DASH_LENGTH: u32 = 10;
const DASH_SPACING: u32 = 6;
// Closest integer stroke to a 2.5 px dashed line
const DASH_STROKE: u32 = 3;

/// Draw `series` on a shared time axis
///
/// The x axis spans all series; the y axis is fixed by `config.y_range`.
pub fn draw_timeseries<DB>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    series: &[Series<'_>],
    config: &TimeseriesConfig,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    for (index, s) in series.iter().enumerate() {
        check_lengths(index, s.x, s.y)?;
    }

    let x_range = data_range(series.iter().flat_map(|s| s.x.iter()), 0.0).unwrap_or(0.0..1.0);
    let y_range = config.y_range.0..config.y_range.1;

    let mut chart = build_chart(
        root,
        title,
        &config.figure,
        x_range.clone(),
        y_range.clone(),
        "Time (s)",
        "Amplitude",
    )?;

    for (index, s) in series.iter().enumerate() {
        match s.style {
            LineStyle::Continuous => {
                let style = Palette99::pick(index).stroke_width(2);
                for run in visible_runs(s.x, s.y, &x_range, &y_range) {
                    chart.draw_series(LineSeries::new(run, style)).render()?;
                }
            }
            LineStyle::Dash => {
                let style = GREEN.stroke_width(DASH_STROKE);
                for run in visible_runs(s.x, s.y, &x_range, &y_range) {
                    chart
                        .draw_series(DashedLineSeries::new(run, DASH_LENGTH, DASH_SPACING, style))
                        .render()?;
                }
            }
            LineStyle::Discrete => draw_stems(&mut chart, s, &x_range, &y_range)?,
        }
    }

    Ok(())
}

/// Render a time-series chart to an SVG file
pub fn plot_timeseries<P: AsRef<Path>>(
    path: P,
    title: &str,
    series: &[Series<'_>],
    config: &TimeseriesConfig,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    let root = svg_root(path, &config.figure)?;
    draw_timeseries(&root, title, series, config)?;
    finish(root, path)
}

// Red stems from zero with red circle markers over a blue baseline
fn draw_stems<DB>(
    chart: &mut Chart<'_, DB>,
    series: &Series<'_>,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let baseline = 0.0f64.clamp(y_range.start, y_range.end);
    let points: Vec<(f64, f64)> = visible_runs(series.x, series.y, x_range, y_range)
        .into_iter()
        .flatten()
        .collect();

    if let Some(x_span) = data_range(points.iter().map(|(x, _)| x), 0.0) {
        chart
            .draw_series(LineSeries::new(
                vec![(x_span.start, baseline), (x_span.end, baseline)],
                BLUE.stroke_width(1),
            ))
            .render()?;
    }

    let stem = RED.stroke_width(1);
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| PathElement::new(vec![(x, baseline), (x, y)], stem)),
        )
        .render()?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), STEM_MARKER_RADIUS, RED.filled())),
        )
        .render()?;

    Ok(())
}
