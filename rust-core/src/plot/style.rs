//! Per-series line styles

use crate::error::PlotError;
use std::fmt;
use std::str::FromStr;

/// How a time series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Solid line through the samples
    #[default]
    Continuous,

    /// Stem plot: a marker on a vertical stem per sample
    Discrete,

    /// Heavy dashed green line
    Dash,
}

impl FromStr for LineStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(LineStyle::Continuous),
            "discrete" => Ok(LineStyle::Discrete),
            "dash" => Ok(LineStyle::Dash),
            _ => Err(PlotError::InvalidStyle(s.to_string())),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineStyle::Continuous => "continuous",
            LineStyle::Discrete => "discrete",
            LineStyle::Dash => "dash",
        };
        f.write_str(name)
    }
}

/// Borrowed (x, y) pair with its line style
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub style: LineStyle,
}

impl<'a> Series<'a> {
    /// Continuous series
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Self {
        Self {
            x,
            y,
            style: LineStyle::Continuous,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_styles() {
        assert_eq!("continuous".parse::<LineStyle>().unwrap(), LineStyle::Continuous);
        assert_eq!("Discrete".parse::<LineStyle>().unwrap(), LineStyle::Discrete);
        assert_eq!(" dash ".parse::<LineStyle>().unwrap(), LineStyle::Dash);
    }

    #[test]
    fn test_unknown_style() {
        let err = "dotted".parse::<LineStyle>().unwrap_err();
        assert!(matches!(err, PlotError::InvalidStyle(ref s) if s == "dotted"));
    }

    #[test]
    fn test_display_round_trips() {
        for style in [LineStyle::Continuous, LineStyle::Discrete, LineStyle::Dash] {
            assert_eq!(style.to_string().parse::<LineStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_series_defaults_to_continuous() {
        let x = [0.0, 1.0];
        let y = [1.0, 0.0];
        assert_eq!(Series::new(&x, &y).style, LineStyle::Continuous);
        assert_eq!(
            Series::new(&x, &y).with_style(LineStyle::Dash).style,
            LineStyle::Dash
        );
    }
}
