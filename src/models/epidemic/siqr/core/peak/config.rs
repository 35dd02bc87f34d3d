use twine_solvers::equation::bisection;

/// Solver configuration for refining infection peaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakConfig {
    /// Maximum iteration count for each bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the peak time.
    pub time_tol: f64,

    /// Absolute tolerance on `dI/dt` at the peak.
    pub rate_tol: f64,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            time_tol: 1e-10,
            rate_tol: 1e-10,
        }
    }
}

impl PeakConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.time_tol,
            x_rel_tol: 0.0,
            residual_tol: self.rate_tol,
        }
    }
}
