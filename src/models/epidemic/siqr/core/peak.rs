//! Refines infection peaks between grid samples.
//!
//! Infection peaks are short: with the reference parameters the first one
//! lasts a fraction of a single grid interval and never shows up in the
//! sampled series. Each interval where `dI/dt` turns from positive to
//! non-positive is bisected on `dI/dt = 0`, re-integrating from the interval's
//! left sample to every candidate time.

mod config;
mod error;
mod problem;

pub use config::PeakConfig;
pub use error::PeakError;

use log::debug;
use twine_solvers::equation::bisection;

use super::{Compartments, Parameters, Sample, SolveError, SolverConfig, Trajectory, derivative};

use problem::{PeakModel, PeakProblem};

/// A local maximum of the infected compartment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Time at which `dI/dt` crosses zero.
    pub time: f64,

    /// Full state at the peak.
    pub state: Compartments,

    /// Bisection iterations used to locate the peak.
    pub iters: usize,
}

impl Peak {
    /// Infected count at the peak.
    #[must_use]
    pub fn infected(&self) -> f64 {
        self.state.infected
    }
}

/// Finds and refines every infection peak inside the trajectory's span.
///
/// Peaks are returned in time order. A maximum at the very first or last
/// sample has no bracketing sign change and is not reported.
///
/// # Errors
///
/// Returns a [`PeakError`] if re-integration fails or a bisection does not
/// converge.
pub(crate) fn infection_peaks(
    parameters: &Parameters,
    trajectory: &Trajectory,
    config: &PeakConfig,
    solver: &SolverConfig,
) -> Result<Vec<Peak>, PeakError> {
    let rates: Vec<f64> = trajectory
        .samples()
        .map(|s| derivative(s.time, &s.state, parameters).infected)
        .collect();

    let mut peaks = Vec::new();
    for (index, pair) in rates.windows(2).enumerate() {
        if pair[0] > 0.0 && pair[1] <= 0.0 {
            let (Some(start), Some(end)) = (trajectory.sample(index), trajectory.sample(index + 1))
            else {
                continue;
            };
            peaks.push(refine(parameters, start, end.time, config, solver)?);
        }
    }

    debug!("found {} infection peaks", peaks.len());
    Ok(peaks)
}

/// Bisects `[start.time, end_time]` for the zero of `dI/dt`.
fn refine(
    parameters: &Parameters,
    start: Sample,
    end_time: f64,
    config: &PeakConfig,
    solver: &SolverConfig,
) -> Result<Peak, PeakError> {
    let model = PeakModel::new(parameters, start, solver);
    let problem = PeakProblem::new(parameters);

    let solution = bisection::solve(
        &model,
        &problem,
        [start.time, end_time],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )
    .map_err(from_bisection)?;

    if solution.status != bisection::Status::Converged {
        return Err(PeakError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let sample = solution.snapshot.output;
    debug!(
        "infection peak I={:.6} at t={:.6} after {} iterations",
        sample.state.infected, sample.time, solution.iters
    );

    Ok(Peak {
        time: sample.time,
        state: sample.state,
        iters: solution.iters,
    })
}

/// Recovers a failed re-integration from the bisection solver's boxed error.
fn from_bisection(error: bisection::Error) -> PeakError {
    match error {
        bisection::Error::Model(source) => match source.downcast::<SolveError>() {
            Ok(solve) => PeakError::Solve(*solve),
            Err(source) => PeakError::Bisection(bisection::Error::Model(source)),
        },
        other => PeakError::Bisection(other),
    }
}
