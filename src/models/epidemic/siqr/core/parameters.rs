use crate::support::constraint::{Constrained, ConstraintError, NonNegative};

/// A non-negative per-unit-time rate.
pub type Rate = Constrained<f64, NonNegative>;

/// The five SIQR rate constants.
///
/// Immutable for the duration of a run and passed explicitly to every
/// derivative evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Transmission rate (β), applied to the bilinear incidence `S·I`.
    pub beta: Rate,

    /// Quarantine-transfer rate (δ), applied to `Q·I`.
    pub delta: Rate,

    /// Recovery-from-quarantine rate (α).
    pub alpha: Rate,

    /// Waning rate (σ) returning removed individuals to susceptible.
    pub sigma: Rate,

    /// Quarantine-release rate (ω) returning quarantined individuals to susceptible.
    pub omega: Rate,
}

impl Parameters {
    /// Creates a parameter set from raw rates.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if any rate is negative or `NaN`.
    pub fn new(
        beta: f64,
        delta: f64,
        alpha: f64,
        sigma: f64,
        omega: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            beta: NonNegative::new(beta)?,
            delta: NonNegative::new(delta)?,
            alpha: NonNegative::new(alpha)?,
            sigma: NonNegative::new(sigma)?,
            omega: NonNegative::new(omega)?,
        })
    }
}

/// β=0.1, δ=9, α=0.5, σ=0.8, ω=2.
impl Default for Parameters {
    fn default() -> Self {
        Self {
            beta: Rate::new_unchecked(0.1),
            delta: Rate::new_unchecked(9.0),
            alpha: Rate::new_unchecked(0.5),
            sigma: Rate::new_unchecked(0.8),
            omega: Rate::new_unchecked(2.0),
        }
    }
}
