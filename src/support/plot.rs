//! Time-series charts rendered with [`plotters`].
//!
//! The renderer knows nothing about epidemics: callers describe each curve as
//! a [`Series`] with a label, a color and a [`SeriesStyle`], and all series are
//! drawn on one shared set of fixed axes described by a [`PlotConfig`].
//!
//! Output goes to an SVG file ([`render_svg`]) or to an in-memory SVG document
//! ([`render_svg_string`]).

mod config;
mod error;

pub use config::PlotConfig;
pub use error::RenderError;

use std::path::Path;

use plotters::{coord::Shift, prelude::*};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// A continuous line.
    Solid,
    /// A line broken into alternating drawn and skipped segments.
    Dashed,
    /// A continuous line with a dot at every sample.
    LineWithDots,
    /// A star-shaped marker at every sample, no line.
    Stars,
}

/// One labeled curve on the chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: RGBColor,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

const STROKE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 3;
const LEGEND_WIDTH: i32 = 20;

/// Renders `series` into an SVG file at `path`.
///
/// # Errors
///
/// Returns a [`RenderError`] if the chart cannot be drawn or the file cannot
/// be written.
pub fn render_svg(
    path: impl AsRef<Path>,
    series: &[Series],
    config: &PlotConfig,
) -> Result<(), RenderError> {
    let root = SVGBackend::new(path.as_ref(), config.size).into_drawing_area();
    draw(&root, series, config)
}

/// Renders `series` into an SVG document held in memory.
///
/// # Errors
///
/// Returns a [`RenderError`] if the chart cannot be drawn.
pub fn render_svg_string(series: &[Series], config: &PlotConfig) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, config.size).into_drawing_area();
        draw(&root, series, config)?;
    }
    Ok(svg)
}

fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    config: &PlotConfig,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .draw()?;

    for s in series {
        let color = s.color;
        let line = color.stroke_width(STROKE_WIDTH);
        let points = s.points.iter().copied();

        match s.style {
            SeriesStyle::Solid => {
                chart
                    .draw_series(LineSeries::new(points, line))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_WIDTH, y)], line)
                    });
            }
            SeriesStyle::Dashed => {
                let dashes = s
                    .points
                    .windows(2)
                    .step_by(2)
                    .map(|pair| PathElement::new(vec![pair[0], pair[1]], line));
                chart
                    .draw_series(dashes)?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_WIDTH / 2, y)], line)
                    });
            }
            SeriesStyle::LineWithDots => {
                chart
                    .draw_series(LineSeries::new(points.clone(), line))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + LEGEND_WIDTH, y)], line)
                    });
                chart.draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, color.filled())))?;
            }
            SeriesStyle::Stars => {
                chart
                    .draw_series(points.map(|p| Cross::new(p, MARKER_SIZE, line)))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        Cross::new((x + LEGEND_WIDTH / 2, y), MARKER_SIZE, line)
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.5))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
