//! Figure and axis configuration

/// Figure geometry shared by all charts
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Outer margin in pixels
    pub margin: u32,

    /// Title font size
    pub caption_font_size: f64,

    /// Space reserved for the x tick labels and description
    pub x_label_area: u32,

    /// Space reserved for the y tick labels and description
    pub y_label_area: u32,
}

impl FigureConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for FigureConfig {
    /// 10 x 4 inch figure at 100 dpi
    fn default() -> Self {
        Self {
            width: 1000,
            height: 400,
            margin: 10,
            caption_font_size: 20.0,
            x_label_area: 40,
            y_label_area: 60,
        }
    }
}

/// Time-series chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesConfig {
    pub figure: FigureConfig,

    /// Fixed amplitude axis
    pub y_range: (f64, f64),
}

impl Default for TimeseriesConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            y_range: (-1.2, 1.2),
        }
    }
}

/// Magnitude-spectrum chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumPlotConfig {
    pub figure: FigureConfig,

    /// Frequency axis in Hz
    pub x_range: (f64, f64),

    /// Level axis in dB; autoscaled over the visible data when `None`
    pub y_range: Option<(f64, f64)>,
}

impl Default for SpectrumPlotConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            x_range: (0.0, 3000.0),
            y_range: None,
        }
    }
}

/// Filter-response chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePlotConfig {
    pub figure: FigureConfig,

    /// Gain axis in dB
    pub y_range: (f64, f64),
}

impl Default for ResponsePlotConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::with_size(640, 480),
            y_range: (-60.0, 20.0),
        }
    }
}
