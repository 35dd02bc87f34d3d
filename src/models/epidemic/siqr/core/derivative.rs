use super::{Compartments, Parameters};

/// Evaluates the SIQR right-hand side at `state`.
///
/// ```text
/// dS/dt = -β·S·I + σ·R + ω·Q
/// dI/dt =  β·S·I - δ·Q·I
/// dQ/dt =  δ·Q·I - ω·Q - α·Q
/// dR/dt =  α·Q - σ·R
/// ```
///
/// The system is autonomous, so `_time` does not enter the equations. It is
/// kept in the signature because integrators evaluate `f(t, y)`.
/// Negative state values are used as given.
#[must_use]
pub fn derivative(_time: f64, state: &Compartments, parameters: &Parameters) -> Compartments {
    let Compartments {
        susceptible: s,
        infected: i,
        quarantined: q,
        removed: r,
    } = *state;

    let beta = parameters.beta.into_inner();
    let delta = parameters.delta.into_inner();
    let alpha = parameters.alpha.into_inner();
    let sigma = parameters.sigma.into_inner();
    let omega = parameters.omega.into_inner();

    let incidence = beta * s * i;
    let quarantining = delta * q * i;

    Compartments {
        susceptible: -incidence + sigma * r + omega * q,
        infected: incidence - quarantining,
        quarantined: quarantining - omega * q - alpha * q,
        removed: alpha * q - sigma * r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn initial_rates() {
        let rate = derivative(0.0, &Compartments::initial(), &Parameters::default());

        assert_relative_eq!(rate.susceptible, -9.8 + 2.0, epsilon = 1e-12);
        assert_relative_eq!(rate.infected, 9.8 - 9.0, epsilon = 1e-12);
        assert_relative_eq!(rate.quarantined, 9.0 - 2.0 - 0.5, epsilon = 1e-12);
        assert_relative_eq!(rate.removed, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn infection_initially_grows() {
        let rate = derivative(0.0, &Compartments::initial(), &Parameters::default());
        assert!(rate.infected > 0.0);
    }

    #[test]
    fn zero_state_is_a_fixed_point() {
        let rate = derivative(0.0, &Compartments::default(), &Parameters::default());
        assert_eq!(rate.to_array(), [0.0; 4]);
    }

    #[test]
    fn is_pure() {
        let state = Compartments::new(60.0, 12.5, 7.25, 20.25);
        let params = Parameters::default();

        let first = derivative(1.0, &state, &params);
        let second = derivative(1.0, &state, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn is_autonomous() {
        let state = Compartments::new(60.0, 12.5, 7.25, 20.25);
        let params = Parameters::default();
        assert_eq!(
            derivative(0.0, &state, &params),
            derivative(7.5, &state, &params)
        );
    }

    #[test]
    fn rates_sum_to_zero() {
        let state = Compartments::new(60.0, 12.5, 7.25, 20.25);
        let rate = derivative(0.0, &state, &Parameters::default());
        assert_relative_eq!(rate.total(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn negative_states_are_not_clamped() {
        let state = Compartments::new(-1.0, 2.0, 0.0, 0.0);
        let rate = derivative(0.0, &state, &Parameters::default());

        // β·S·I = 0.1 · -1 · 2
        assert_relative_eq!(rate.infected, -0.2, epsilon = 1e-12);
        assert_relative_eq!(rate.susceptible, 0.2, epsilon = 1e-12);
    }
}
