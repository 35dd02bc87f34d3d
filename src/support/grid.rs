//! Evenly spaced sample grids.
//!
//! A [`TimeGrid`] describes where a solution is sampled, not how the
//! integrator steps internally. Points follow `linspace` semantics: the first
//! point is `start`, the last point is exactly `end`, and interior points are
//! `start + k * step`.
//!
//! ```
//! use siqr_models::support::grid::TimeGrid;
//!
//! let grid = TimeGrid::new(0.0, 1.0, 5).unwrap();
//! assert_eq!(grid.points(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`TimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// A grid needs both of its endpoints.
    #[error("grid needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },

    /// A bound is infinite or `NaN`.
    #[error("grid bounds must be finite: start={start}, end={end}")]
    NonFinite { start: f64, end: f64 },

    /// The grid does not move forward in time.
    #[error("grid end must be after start: start={start}, end={end}")]
    EmptySpan { start: f64, end: f64 },
}

/// An ordered, evenly spaced set of sample times over `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    samples: usize,
}

impl TimeGrid {
    /// Number of samples in the default grid.
    pub const DEFAULT_SAMPLES: usize = 50;

    /// Creates a grid of `samples` points from `start` to `end`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `samples < 2`, a bound is not finite,
    /// or `end <= start`.
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self, GridError> {
        if samples < 2 {
            return Err(GridError::TooFewSamples { samples });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFinite { start, end });
        }
        if end <= start {
            return Err(GridError::EmptySpan { start, end });
        }
        Ok(Self {
            start,
            end,
            samples,
        })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of sample points, including both endpoints.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Spacing between adjacent samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let intervals = (self.samples - 1) as f64;
        (self.end - self.start) / intervals
    }

    /// Materializes the sample times.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        let step = self.step();
        let last = self.samples - 1;
        (0..self.samples)
            .map(|k| {
                if k == last {
                    self.end
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let k = k as f64;
                    self.start + k * step
                }
            })
            .collect()
    }
}

/// The reference horizon: 50 samples over `[0, 10]`.
impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 10.0,
            samples: Self::DEFAULT_SAMPLES,
        }
    }
}
