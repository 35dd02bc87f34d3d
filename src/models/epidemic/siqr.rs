//! The SIQR (Susceptible–Infected–Quarantined–Removed) epidemic model.
//!
//! [`Siqr`] holds a parameter set and exposes the model's operations:
//!
//! - [`Siqr::derivative`]: the right-hand side of the ODE system
//! - [`Siqr::solve`]: adaptive integration sampled on a [`TimeGrid`]
//! - [`Siqr::infection_peaks`]: infection maxima refined between samples
//! - [`Siqr::chart_series`]: the four trajectories, styled for plotting
//!
//! It also implements [`twine_core::Model`], mapping a time/state [`Sample`]
//! to its derivative.
//!
//! # Example
//!
//! ```
//! use siqr_models::models::epidemic::siqr::{Compartments, Siqr, SolverConfig};
//! use siqr_models::support::grid::TimeGrid;
//!
//! let model = Siqr::default();
//! let trajectory = model
//!     .solve(Compartments::initial(), &TimeGrid::default(), &SolverConfig::default())
//!     .unwrap();
//!
//! assert_eq!(trajectory.len(), 50);
//! assert_eq!(trajectory.states()[0], Compartments::initial());
//! ```

mod core;

pub use self::core::{
    Compartment, Compartments, Parameters, Peak, PeakConfig, PeakError, Rate, Sample, SolveError,
    SolverConfig, Tolerance, Trajectory, derivative,
};

use std::convert::Infallible;

use plotters::style::RGBColor;
use twine_core::Model;

use crate::support::{
    grid::TimeGrid,
    plot::{Series, SeriesStyle},
};

/// SIQR model with a fixed parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Siqr {
    pub parameters: Parameters,
}

impl Siqr {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// Evaluates the time derivative of `state`.
    #[must_use]
    pub fn derivative(&self, state: &Compartments) -> Compartments {
        derivative(0.0, state, &self.parameters)
    }

    /// Integrates from `initial` at `grid.start()` and samples every grid point.
    ///
    /// The first sample is `initial`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the integrator cannot complete the horizon.
    pub fn solve(
        &self,
        initial: Compartments,
        grid: &TimeGrid,
        config: &SolverConfig,
    ) -> Result<Trajectory, SolveError> {
        self::core::solve(&self.parameters, initial, grid, config)
    }

    /// Locates every local maximum of `I` within the trajectory's span.
    ///
    /// # Errors
    ///
    /// Returns a [`PeakError`] if re-integration or bisection fails.
    pub fn infection_peaks(
        &self,
        trajectory: &Trajectory,
        config: &PeakConfig,
        solver: &SolverConfig,
    ) -> Result<Vec<Peak>, PeakError> {
        self::core::infection_peaks(&self.parameters, trajectory, config, solver)
    }

    /// Builds one chart series per compartment.
    ///
    /// Susceptible is drawn solid, Infected dashed, Quarantined as a line with
    /// dots and Removed as star markers.
    #[must_use]
    pub fn chart_series(trajectory: &Trajectory) -> Vec<Series> {
        Compartment::ALL
            .into_iter()
            .map(|compartment| {
                let (color, style) = appearance(compartment);
                Series {
                    label: compartment.label().to_string(),
                    color,
                    style,
                    points: trajectory
                        .samples()
                        .map(|s| (s.time, s.state.get(compartment)))
                        .collect(),
                }
            })
            .collect()
    }
}

fn appearance(compartment: Compartment) -> (RGBColor, SeriesStyle) {
    match compartment {
        Compartment::Susceptible => (RGBColor(31, 119, 180), SeriesStyle::Solid),
        Compartment::Infected => (RGBColor(255, 127, 14), SeriesStyle::Dashed),
        Compartment::Quarantined => (RGBColor(44, 160, 44), SeriesStyle::LineWithDots),
        Compartment::Removed => (RGBColor(214, 39, 40), SeriesStyle::Stars),
    }
}

impl Model for Siqr {
    type Input = Sample;
    type Output = Compartments;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(derivative(input.time, &input.state, &self.parameters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::plot::{PlotConfig, render_svg_string};

    fn reference() -> Trajectory {
        Siqr::default()
            .solve(
                Compartments::initial(),
                &TimeGrid::default(),
                &SolverConfig::default(),
            )
            .unwrap()
    }

    #[test]
    fn model_call_matches_derivative() {
        let model = Siqr::default();
        let sample = Sample {
            time: 2.5,
            state: Compartments::new(70.0, 10.0, 15.0, 5.0),
        };

        let rate = model.call(&sample).unwrap();
        assert_eq!(rate, model.derivative(&sample.state));
    }

    #[test]
    fn parameters_flow_through() {
        let model = Siqr::new(Parameters::new(0.2, 9.0, 0.5, 0.8, 2.0).unwrap());
        let rate = model.derivative(&Compartments::initial());

        // 0.2·98·1 - 9·1·1
        assert!((rate.infected - 10.6).abs() < 1e-12);
    }

    #[test]
    fn chart_series_cover_each_compartment() {
        let trajectory = reference();
        let series = Siqr::chart_series(&trajectory);

        assert_eq!(series.len(), 4);
        for (s, compartment) in series.iter().zip(Compartment::ALL) {
            assert_eq!(s.label, compartment.label());
            assert_eq!(s.points.len(), trajectory.len());
            assert_eq!(s.points[0].1, Compartments::initial().get(compartment));
        }

        let styles: Vec<_> = series.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                SeriesStyle::Solid,
                SeriesStyle::Dashed,
                SeriesStyle::LineWithDots,
                SeriesStyle::Stars
            ]
        );
    }

    #[test]
    fn renders_reference_chart() {
        let series = Siqr::chart_series(&reference());
        let svg = render_svg_string(&series, &PlotConfig::default()).unwrap();

        for compartment in Compartment::ALL {
            assert!(svg.contains(compartment.label()));
        }
        assert!(svg.contains("SIQR model with nonlinear IQ term"));
        assert!(svg.contains("Time"));
        assert!(svg.contains("Population"));
    }

    #[test]
    fn infection_peaks_use_model_parameters() {
        let model = Siqr::default();
        let trajectory = reference();
        let peaks = model
            .infection_peaks(&trajectory, &PeakConfig::default(), &SolverConfig::default())
            .unwrap();

        assert!(!peaks.is_empty());
        assert!(peaks[0].infected() > 1.0);
    }
}
