//! Positive-frequency half of centered magnitude spectra

use super::canvas::{
    build_chart, check_lengths, data_range, finish, svg_root, visible_runs, RenderResultExt,
};
use super::config::SpectrumPlotConfig;
use crate::error::PlotError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Draw centered spectra against their frequency axes
///
/// Only bins from `len / 2` onwards (0 Hz upward) are drawn. Dashed markers
/// are added at `fs` and `fs / 2` when they fall inside the frequency axis.
///
/// # Arguments
/// * `freqs` - One frequency axis (Hz) per spectrum, centered like the spectrum
/// * `spectra` - Levels in dB, e.g. from [`compute_spectrum`](crate::compute_spectrum)
/// * `fs` - Sampling rate in Hz
/// * `labels` - Optional legend entry per spectrum
pub fn draw_spectrum<DB, F, S>(
    root: &DrawingArea<DB, Shift>,
    freqs: &[F],
    spectra: &[S],
    fs: f64,
    title: &str,
    labels: Option<&[&str]>,
    config: &SpectrumPlotConfig,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: AsRef<[f64]>,
    S: AsRef<[f64]>,
{
    if freqs.len() != spectra.len() {
        return Err(PlotError::MismatchedCount {
            what: "spectra",
            expected: freqs.len(),
            found: spectra.len(),
        });
    }
    if let Some(labels) = labels {
        if labels.len() < freqs.len() {
            return Err(PlotError::MismatchedCount {
                what: "labels",
                expected: freqs.len(),
                found: labels.len(),
            });
        }
    }

    let halves = freqs
        .iter()
        .zip(spectra.iter())
        .enumerate()
        .map(|(index, (f, s))| {
            let (f, s) = (f.as_ref(), s.as_ref());
            check_lengths(index, f, s)?;
            let start = f.len() / 2;
            Ok((&f[start..], &s[start..]))
        })
        .collect::<Result<Vec<_>, PlotError>>()?;

    let x_range = config.x_range.0..config.x_range.1;
    let y_range = match config.y_range {
        Some((lo, hi)) => lo..hi,
        None => {
            let in_view = halves.iter().flat_map(|(f, s)| {
                f.iter()
                    .zip(s.iter())
                    .filter(|(x, _)| x_range.contains(*x) || **x == x_range.end)
                    .map(|(_, y)| y)
            });
            data_range(in_view, 0.05).unwrap_or_else(|| {
                log::warn!("no finite levels in view, using a default dB range");
                -100.0..0.0
            })
        }
    };

    let mut chart = build_chart(
        root,
        title,
        &config.figure,
        x_range.clone(),
        y_range.clone(),
        "Frequency, Hz",
        "Amplitude, dB",
    )?;

    for (index, (f, s)) in halves.iter().enumerate() {
        let style = Palette99::pick(index).stroke_width(2);
        let label = labels.map(|l| l[index]);

        for (run_index, run) in visible_runs(f, s, &x_range, &y_range)
            .into_iter()
            .enumerate()
        {
            let anno = chart.draw_series(LineSeries::new(run, style)).render()?;
            if let (0, Some(label)) = (run_index, label) {
                anno.label(label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
        }
    }

    let markers = [(fs, "fs", GREEN.stroke_width(2)), (fs / 2.0, "fs/2", RED.stroke_width(2))];
    for (freq, label, style) in markers {
        if freq < x_range.start || freq > x_range.end {
            log::debug!("{} marker at {} Hz is outside the frequency axis", label, freq);
            continue;
        }

        chart
            .draw_series(DashedLineSeries::new(
                vec![(freq, y_range.start), (freq, y_range.end)],
                8,
                5,
                style,
            ))
            .render()?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .render()?;

    Ok(())
}

/// Render a spectrum chart to an SVG file
pub fn plot_spectrum<P, F, S>(
    path: P,
    freqs: &[F],
    spectra: &[S],
    fs: f64,
    title: &str,
    labels: Option<&[&str]>,
    config: &SpectrumPlotConfig,
) -> Result<(), PlotError>
where
    P: AsRef<Path>,
    F: AsRef<[f64]>,
    S: AsRef<[f64]>,
{
    let path = path.as_ref();
    let root = svg_root(path, &config.figure)?;
    draw_spectrum(&root, freqs, spectra, fs, title, labels, config)?;
    finish(root, path)
}
