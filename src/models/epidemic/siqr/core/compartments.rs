use std::fmt;

use crate::support::constraint::{ConstraintError, NonNegative};

/// One of the four SIQR compartments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compartment {
    Susceptible,
    Infected,
    Quarantined,
    Removed,
}

impl Compartment {
    /// All compartments, in state-vector order.
    pub const ALL: [Compartment; 4] = [
        Compartment::Susceptible,
        Compartment::Infected,
        Compartment::Quarantined,
        Compartment::Removed,
    ];

    /// Human-readable name, used for chart legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Compartment::Susceptible => "Susceptible",
            Compartment::Infected => "Infected",
            Compartment::Quarantined => "Quarantined",
            Compartment::Removed => "Removed",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Population counts (or their time derivatives) for each compartment.
///
/// Values are not constrained: the integrator may overshoot below zero, and
/// those values are kept as computed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Compartments {
    pub susceptible: f64,
    pub infected: f64,
    pub quarantined: f64,
    pub removed: f64,
}

impl Compartments {
    /// Creates a state without validation.
    #[must_use]
    pub fn new(susceptible: f64, infected: f64, quarantined: f64, removed: f64) -> Self {
        Self {
            susceptible,
            infected,
            quarantined,
            removed,
        }
    }

    /// Creates an initial population, rejecting negative or `NaN` counts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if any count is negative or `NaN`.
    pub fn population(
        susceptible: f64,
        infected: f64,
        quarantined: f64,
        removed: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            susceptible: NonNegative::new(susceptible)?.into_inner(),
            infected: NonNegative::new(infected)?.into_inner(),
            quarantined: NonNegative::new(quarantined)?.into_inner(),
            removed: NonNegative::new(removed)?.into_inner(),
        })
    }

    /// The reference initial condition: S=98, I=1, Q=1, R=0.
    #[must_use]
    pub fn initial() -> Self {
        Self::new(98.0, 1.0, 1.0, 0.0)
    }

    /// Returns the value for one compartment.
    #[must_use]
    pub fn get(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Infected => self.infected,
            Compartment::Quarantined => self.quarantined,
            Compartment::Removed => self.removed,
        }
    }

    /// Sum over all compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.infected + self.quarantined + self.removed
    }

    /// Returns `true` if every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Values in `[S, I, Q, R]` order.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [
            self.susceptible,
            self.infected,
            self.quarantined,
            self.removed,
        ]
    }
}

impl From<[f64; 4]> for Compartments {
    fn from([susceptible, infected, quarantined, removed]: [f64; 4]) -> Self {
        Self::new(susceptible, infected, quarantined, removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_condition() {
        let y0 = Compartments::initial();
        assert_eq!(y0.to_array(), [98.0, 1.0, 1.0, 0.0]);
        assert_eq!(y0.total(), 100.0);
    }

    #[test]
    fn array_order_matches_compartment_order() {
        let state = Compartments::from([1.0, 2.0, 3.0, 4.0]);
        for (compartment, value) in Compartment::ALL.into_iter().zip(state.to_array()) {
            assert_eq!(state.get(compartment), value);
        }
    }

    #[test]
    fn population_rejects_negative_counts() {
        assert!(Compartments::population(98.0, 1.0, 1.0, 0.0).is_ok());
        assert_eq!(
            Compartments::population(98.0, -1.0, 1.0, 0.0),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn negative_values_are_representable() {
        let state = Compartments::new(-1e-9, 0.0, 0.0, 0.0);
        assert!(state.is_finite());
        assert!(state.susceptible < 0.0);
        assert!(!Compartments::new(f64::NAN, 0.0, 0.0, 0.0).is_finite());
    }

    #[test]
    fn labels() {
        assert_eq!(Compartment::Quarantined.to_string(), "Quarantined");
        assert_eq!(Compartment::ALL.map(Compartment::label)[3], "Removed");
    }
}
