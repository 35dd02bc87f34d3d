//! Problem formulation for locating `dI/dt = 0` between two samples.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::epidemic::siqr::core::{
    Parameters, Sample, SolveError, SolverConfig, derivative, solve::advance,
};

/// Model adapter that integrates from a fixed sample to a candidate time.
///
/// The candidate time is the sole input variable.
pub(super) struct PeakModel<'a> {
    parameters: &'a Parameters,
    start: Sample,
    solver: &'a SolverConfig,
}

impl<'a> PeakModel<'a> {
    pub(super) fn new(parameters: &'a Parameters, start: Sample, solver: &'a SolverConfig) -> Self {
        Self {
            parameters,
            start,
            solver,
        }
    }
}

impl Model for PeakModel<'_> {
    type Input = f64;
    type Output = Sample;
    type Error = SolveError;

    fn call(&self, time: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = advance(
            self.parameters,
            self.start.state,
            self.start.time,
            *time,
            self.solver,
        )?;
        Ok(Sample { time: *time, state })
    }
}

/// Equation problem whose residual is `dI/dt` at the candidate time.
pub(super) struct PeakProblem<'a> {
    parameters: &'a Parameters,
}

impl<'a> PeakProblem<'a> {
    pub(super) fn new(parameters: &'a Parameters) -> Self {
        Self { parameters }
    }
}

impl EquationProblem<1> for PeakProblem<'_> {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let rate = derivative(output.time, &output.state, self.parameters);
        Ok([rate.infected])
    }
}
