use super::{Compartment, Compartments};

/// The state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: Compartments,
}

/// A solved trajectory: one state per grid sample.
///
/// Produced once by a solve and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<Compartments>,
}

impl Trajectory {
    pub(super) fn new(times: Vec<f64>, states: Vec<Compartments>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self { times, states }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times, in increasing order.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// States, one per entry of [`Trajectory::times`].
    #[must_use]
    pub fn states(&self) -> &[Compartments] {
        &self.states
    }

    /// Iterates over `(time, state)` samples.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample> + Clone + '_ {
        self.times
            .iter()
            .zip(&self.states)
            .map(|(&time, &state)| Sample { time, state })
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            state: *self.states.get(index)?,
        })
    }

    /// Returns the last sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.sample(self.len().checked_sub(1)?)
    }

    /// Values of one compartment at each sample.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Vec<f64> {
        self.states.iter().map(|s| s.get(compartment)).collect()
    }

    /// Total population `S+I+Q+R` at each sample.
    ///
    /// Reported as a diagnostic only; states are never rescaled to it.
    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.states.iter().map(Compartments::total).collect()
    }

    /// The sample with the largest infected count.
    ///
    /// Ties resolve to the earliest sample.
    #[must_use]
    pub fn peak_infected(&self) -> Option<Sample> {
        self.samples()
            .reduce(|best, s| if s.state.infected > best.state.infected { s } else { best })
    }
}
