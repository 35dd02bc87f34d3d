use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// A numerical-integration failure.
///
/// Each variant names the grid interval `[t_start, t_end]` that could not be
/// completed. No partial trajectory is returned.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The adaptive stepper gave up (step budget, step size underflow, or stiffness).
    #[error("integration failed on [{t_start}, {t_end}]")]
    Integration {
        t_start: f64,
        t_end: f64,
        #[source]
        source: IntegrationError,
    },

    /// The stepper finished but produced a `NaN` or infinite state.
    #[error("integration produced a non-finite state on [{t_start}, {t_end}]")]
    NonFinite { t_start: f64, t_end: f64 },

    /// The stepper finished without reporting any state.
    #[error("integration produced no output on [{t_start}, {t_end}]")]
    NoOutput { t_start: f64, t_end: f64 },
}
