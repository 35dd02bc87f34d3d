use std::ops::Range;

/// Chart layout: title, axis labels, fixed axis ranges and pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Horizontal axis range. Data outside it is clipped.
    pub x_range: Range<f64>,

    /// Vertical axis range. Data outside it is clipped.
    pub y_range: Range<f64>,

    /// Output size in pixels, `(width, height)`.
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "SIQR model with nonlinear IQ term".to_string(),
            x_label: "Time".to_string(),
            y_label: "Population".to_string(),
            x_range: 0.0..10.0,
            y_range: 0.0..100.0,
            size: (1024, 768),
        }
    }
}
