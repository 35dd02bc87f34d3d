//! Adaptive integration of the SIQR system over a sample grid.
//!
//! Each grid interval is integrated by a fresh Dormand–Prince 5(4) stepper
//! started from the state at the left sample, so the trajectory has exactly
//! one state per grid point and the first state is the initial condition.

mod config;
mod error;
mod system;

pub use config::{SolverConfig, Tolerance};
pub use error::SolveError;

use log::{debug, trace};
use ode_solvers::{dop_shared::OutputType, dopri5::Dopri5};

use crate::support::grid::TimeGrid;

use super::{Compartments, Parameters, Trajectory};

use system::{SiqrSystem, from_vector, to_vector};

// Step controller settings, the same values `Dopri5::new` uses.
const SAFETY_FACTOR: f64 = 0.9;
const BETA: f64 = 0.04;
const FAC_MIN: f64 = 0.2;
const FAC_MAX: f64 = 10.0;
const MAX_STEPS: u32 = 100_000;
const STIFFNESS_CHECK: u32 = 1000;

/// Solves the SIQR initial-value problem, sampled at every point of `grid`.
///
/// # Errors
///
/// Returns a [`SolveError`] if any grid interval cannot be integrated.
pub(crate) fn solve(
    parameters: &Parameters,
    initial: Compartments,
    grid: &TimeGrid,
    config: &SolverConfig,
) -> Result<Trajectory, SolveError> {
    debug!(
        "solving SIQR on [{}, {}] with {} samples",
        grid.start(),
        grid.end(),
        grid.samples()
    );

    let times = grid.points();
    let mut states = Vec::with_capacity(times.len());
    let mut state = initial;
    states.push(state);

    for pair in times.windows(2) {
        state = advance(parameters, state, pair[0], pair[1], config)?;
        states.push(state);
    }

    Ok(Trajectory::new(times, states))
}

/// Integrates from `state` at `t_start` to `t_end`.
///
/// # Errors
///
/// Returns a [`SolveError`] if the stepper fails or the result is not finite.
pub(super) fn advance(
    parameters: &Parameters,
    state: Compartments,
    t_start: f64,
    t_end: f64,
    config: &SolverConfig,
) -> Result<Compartments, SolveError> {
    if t_end == t_start {
        return Ok(state);
    }

    // Sparse output records accepted steps only, ending exactly at `t_end`.
    let mut stepper = Dopri5::from_param(
        SiqrSystem::new(*parameters),
        t_start,
        t_end,
        0.0,
        to_vector(state),
        config.rel_tol.into_inner(),
        config.abs_tol.into_inner(),
        SAFETY_FACTOR,
        BETA,
        FAC_MIN,
        FAC_MAX,
        t_end - t_start,
        0.0,
        MAX_STEPS,
        STIFFNESS_CHECK,
        OutputType::Sparse,
    );

    let stats = stepper
        .integrate()
        .map_err(|source| SolveError::Integration {
            t_start,
            t_end,
            source,
        })?;
    trace!("integrated [{t_start:.6}, {t_end:.6}]: {stats}");

    let next = stepper
        .y_out()
        .last()
        .map(from_vector)
        .ok_or(SolveError::NoOutput { t_start, t_end })?;

    if !next.is_finite() {
        return Err(SolveError::NonFinite { t_start, t_end });
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::epidemic::siqr::core::Compartment;

    fn reference() -> Trajectory {
        solve(
            &Parameters::default(),
            Compartments::initial(),
            &TimeGrid::default(),
            &SolverConfig::default(),
        )
        .expect("reference solve should succeed")
    }

    #[test]
    fn starts_at_initial_condition() {
        let trajectory = reference();
        let first = trajectory.sample(0).unwrap();

        assert_eq!(first.time, 0.0);
        assert_eq!(first.state, Compartments::initial());
    }

    #[test]
    fn one_state_per_grid_point() {
        let trajectory = reference();
        let grid = TimeGrid::default();

        assert_eq!(trajectory.len(), 50);
        assert_eq!(trajectory.times(), grid.points().as_slice());
        for compartment in Compartment::ALL {
            assert_eq!(trajectory.series(compartment).len(), 50);
        }
    }

    #[test]
    fn matches_reference_solution() {
        let trajectory = reference();

        let expected = [
            (1, [97.297_405_54, 0.296_333_00, 2.240_224_41, 0.166_037_05]),
            (7, [97.693_701_46, 0.974_344_23, 0.936_212_82, 0.395_741_50]),
            (25, [98.501_670_56, 0.048_665_67, 0.728_288_69, 0.721_375_09]),
            (49, [97.319_063_03, 0.898_157_63, 1.191_895_43, 0.590_883_91]),
        ];

        for (index, values) in expected {
            let actual = trajectory.states()[index].to_array();
            for (a, e) in actual.into_iter().zip(values) {
                assert_relative_eq!(a, e, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(reference(), reference());
    }

    #[test]
    fn infection_rises_before_first_sample() {
        let params = Parameters::default();
        let early = advance(
            &params,
            Compartments::initial(),
            0.0,
            0.01,
            &SolverConfig::default(),
        )
        .unwrap();

        assert!(early.infected > 1.0);
        assert_relative_eq!(early.infected, 1.004_974_83, epsilon = 1e-6);
    }

    #[test]
    fn total_population_stays_put() {
        for total in reference().totals() {
            assert_relative_eq!(total, 100.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn converges_as_tolerance_tightens() {
        let loose = SolverConfig {
            rel_tol: Tolerance::new(1e-6).unwrap(),
            abs_tol: Tolerance::new(1e-6).unwrap(),
        };
        let coarse = solve(
            &Parameters::default(),
            Compartments::initial(),
            &TimeGrid::default(),
            &loose,
        )
        .unwrap();
        let fine = reference();

        for (c, f) in coarse.states().iter().zip(fine.states()) {
            for (a, b) in c.to_array().into_iter().zip(f.to_array()) {
                assert_relative_eq!(a, b, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn stiff_rates_fail_with_interval() {
        let parameters = Parameters::new(1e3, 1e3, 0.5, 0.8, 2.0).unwrap();
        let result = solve(
            &parameters,
            Compartments::initial(),
            &TimeGrid::default(),
            &SolverConfig::default(),
        );

        let Err(SolveError::Integration { t_start, t_end, .. }) = result else {
            panic!("expected an integration failure, got {result:?}");
        };
        assert_eq!(t_start, 0.0);
        assert_relative_eq!(t_end, 10.0 / 49.0);
    }

    #[test]
    fn reaches_interval_end() {
        let state = advance(
            &Parameters::default(),
            Compartments::initial(),
            0.0,
            10.0 / 49.0,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(state.infected, 0.296_333, epsilon = 1e-5);
    }

    #[test]
    fn zero_state_stays_at_zero() {
        let trajectory = solve(
            &Parameters::default(),
            Compartments::default(),
            &TimeGrid::default(),
            &SolverConfig::default(),
        )
        .unwrap();

        for state in trajectory.states() {
            assert_eq!(state.to_array(), [0.0; 4]);
        }
    }

    #[test]
    fn zero_length_interval_is_identity() {
        let state = Compartments::new(50.0, 20.0, 20.0, 10.0);
        let same = advance(
            &Parameters::default(),
            state,
            3.0,
            3.0,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(same, state);
    }
}
