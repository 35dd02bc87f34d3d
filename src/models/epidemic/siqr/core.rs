//! SIQR compartmental dynamics.
//!
//! Four compartments exchange population through five rates:
//!
//! - S → I by bilinear incidence `β·S·I`
//! - I → Q at `δ·Q·I`
//! - Q → R at `α·Q`, and Q → S at `ω·Q`
//! - R → S at `σ·R`
//!
//! The core provides the derivative, the adaptive grid solve, the trajectory
//! container and the peak search. The public [`Siqr`](super::Siqr) type is a
//! thin adapter over these functions.

mod compartments;
mod derivative;
mod parameters;
mod peak;
mod solve;
mod trajectory;

pub use compartments::{Compartment, Compartments};
pub use derivative::derivative;
pub use parameters::{Parameters, Rate};
pub use peak::{Peak, PeakConfig, PeakError};
pub use solve::{SolveError, SolverConfig, Tolerance};
pub use trajectory::{Sample, Trajectory};

pub(super) use peak::infection_peaks;
pub(super) use solve::solve;
