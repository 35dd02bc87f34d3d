use crate::support::constraint::{Constrained, StrictlyPositive};

/// A strictly positive integrator tolerance.
pub type Tolerance = Constrained<f64, StrictlyPositive>;

/// Error-control settings for the adaptive integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Relative tolerance on each state component.
    pub rel_tol: Tolerance,

    /// Absolute tolerance on each state component.
    pub abs_tol: Tolerance,
}

impl SolverConfig {
    /// Tolerance used by the reference solver for both `rel_tol` and `abs_tol`.
    pub const DEFAULT_TOL: f64 = 1.49012e-8;
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rel_tol: Tolerance::new_unchecked(Self::DEFAULT_TOL),
            abs_tol: Tolerance::new_unchecked(Self::DEFAULT_TOL),
        }
    }
}
