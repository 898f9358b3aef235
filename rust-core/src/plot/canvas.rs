//! Shared chart plumbing: SVG targets, axis ranges, point clipping

use super::config::FigureConfig;
use crate::error::PlotError;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

pub(crate) type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Collapse plotters' backend-generic errors into [`PlotError::Render`]
pub(crate) trait RenderResultExt<T> {
    fn render(self) -> Result<T, PlotError>;
}

impl<T, E: std::error::Error + Send + Sync> RenderResultExt<T> for Result<T, DrawingAreaErrorKind<E>> {
    fn render(self) -> Result<T, PlotError> {
        self.map_err(|e| PlotError::Render(e.to_string()))
    }
}

/// White-filled SVG drawing area of the configured size
pub(crate) fn svg_root<'a>(
    path: &'a Path,
    figure: &FigureConfig,
) -> Result<DrawingArea<SVGBackend<'a>, Shift>, PlotError> {
    log::debug!(
        "creating {}x{} figure at {}",
        figure.width,
        figure.height,
        path.display()
    );

    let root = SVGBackend::new(path, figure.size()).into_drawing_area();
    root.fill(&WHITE).render()?;
    Ok(root)
}

/// Flush an SVG drawing area to disk
pub(crate) fn finish(root: DrawingArea<SVGBackend<'_>, Shift>, path: &Path) -> Result<(), PlotError> {
    root.present().render()?;
    log::info!("wrote figure to {}", path.display());
    Ok(())
}

/// Titled cartesian chart with a grid and axis descriptions
pub(crate) fn build_chart<'a, DB>(
    root: &'a DrawingArea<DB, Shift>,
    title: &str,
    figure: &FigureConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
    x_desc: &str,
    y_desc: &str,
) -> Result<Chart<'a, DB>, PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    check_range("x", &x_range)?;
    check_range("y", &y_range)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", figure.caption_font_size))
        .margin(figure.margin)
        .x_label_area_size(figure.x_label_area)
        .y_label_area_size(figure.y_label_area)
        .build_cartesian_2d(x_range, y_range)
        .render()?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .render()?;

    Ok(chart)
}

fn check_range(axis: &str, range: &Range<f64>) -> Result<(), PlotError> {
    if !range.start.is_finite() || !range.end.is_finite() || range.start >= range.end {
        return Err(PlotError::InvalidAxis(format!(
            "{} axis {}..{}",
            axis, range.start, range.end
        )));
    }
    Ok(())
}

pub(crate) fn check_lengths(index: usize, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if x.len() != y.len() {
        return Err(PlotError::MismatchedSeries {
            index,
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

/// Bounds of the finite values, padded by `pad` of the span on each side
///
/// A flat set is widened by one unit each way; an empty set yields `None`.
pub(crate) fn data_range<'v, I>(values: I, pad: f64) -> Option<Range<f64>>
where
    I: IntoIterator<Item = &'v f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return None;
    }
    if lo == hi {
        return Some(lo - 1.0..hi + 1.0);
    }

    let margin = (hi - lo) * pad;
    Some(lo - margin..hi + margin)
}

/// Split a polyline into runs of points that are finite and inside the axes
///
/// Points outside the box break the line, the way an axis clip would.
pub(crate) fn visible_runs(
    x: &[f64],
    y: &[f64],
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    let mut hidden = 0usize;

    for (&px, &py) in x.iter().zip(y.iter()) {
        let visible = px.is_finite()
            && py.is_finite()
            && px >= x_range.start
            && px <= x_range.end
            && py >= y_range.start
            && py <= y_range.end;

        if visible {
            current.push((px, py));
        } else {
            hidden += 1;
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let non_finite = x
        .iter()
        .zip(y.iter())
        .filter(|(px, py)| !px.is_finite() || !py.is_finite())
        .count();
    if non_finite > 0 {
        log::warn!("dropped {} non-finite points from series", non_finite);
    }
    if hidden > non_finite {
        log::debug!("{} points fall outside the axes", hidden - non_finite);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_range_pads() {
        let range = data_range(&[0.0, 10.0], 0.1).unwrap();
        assert!((range.start + 1.0).abs() < 1e-12);
        assert!((range.end - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_data_range_ignores_non_finite() {
        let range = data_range(&[f64::NEG_INFINITY, -3.0, f64::NAN, 5.0], 0.0).unwrap();
        assert_eq!(range, -3.0..5.0);
    }

    #[test]
    fn test_data_range_flat_and_empty() {
        assert_eq!(data_range(&[2.0, 2.0], 0.1), Some(1.0..3.0));
        assert_eq!(data_range(&[f64::NEG_INFINITY], 0.1), None);
        assert_eq!(data_range(&[], 0.1), None);
    }

    #[test]
    fn test_visible_runs_split_on_gaps() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 1.0, f64::NEG_INFINITY, 1.0, 50.0, 0.5];

        let runs = visible_runs(&x, &y, &(0.0..10.0), &(-10.0..10.0));

        assert_eq!(
            runs,
            vec![
                vec![(0.0, 0.0), (1.0, 1.0)],
                vec![(3.0, 1.0)],
                vec![(5.0, 0.5)],
            ]
        );
    }

    #[test]
    fn test_check_lengths() {
        assert!(check_lengths(0, &[1.0], &[1.0]).is_ok());
        assert!(matches!(
            check_lengths(2, &[1.0, 2.0], &[1.0]),
            Err(PlotError::MismatchedSeries { index: 2, x_len: 2, y_len: 1 })
        ));
    }
}
