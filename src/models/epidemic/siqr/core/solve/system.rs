//! Adapter between the SIQR derivative and the `ode_solvers` state vector.

use ode_solvers::{System, Vector4};

use crate::models::epidemic::siqr::core::{Compartments, Parameters, derivative};

pub(super) type Vector = Vector4<f64>;

pub(super) struct SiqrSystem {
    parameters: Parameters,
}

impl SiqrSystem {
    pub(super) fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }
}

impl System<Vector> for SiqrSystem {
    fn system(&self, time: f64, y: &Vector, dy: &mut Vector) {
        let rate = derivative(time, &from_vector(y), &self.parameters);
        *dy = to_vector(rate);
    }
}

pub(super) fn to_vector(state: Compartments) -> Vector {
    let [s, i, q, r] = state.to_array();
    Vector::new(s, i, q, r)
}

pub(super) fn from_vector(y: &Vector) -> Compartments {
    Compartments::new(y[0], y[1], y[2], y[3])
}
