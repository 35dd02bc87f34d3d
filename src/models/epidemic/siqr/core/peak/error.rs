use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::epidemic::siqr::core::SolveError;

/// Errors that can occur while refining an infection peak.
#[derive(Debug, Error)]
pub enum PeakError {
    /// Re-integrating to a bracket endpoint failed.
    #[error("peak bracket solve failed")]
    Solve(#[from] SolveError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("peak search hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best `dI/dt` residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
