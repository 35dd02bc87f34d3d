//! # SIQR Models
//!
//! A Susceptible–Infected–Quarantined–Removed epidemic model: its ODE
//! system, an adaptive-step solve over a sample grid, infection peak
//! analysis, and chart rendering.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, implemented as [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   sample grids, plotting).
//!
//! ## Example
//!
//! ```
//! use siqr_models::models::epidemic::siqr::{
//!     Compartments, PeakConfig, Siqr, SolverConfig,
//! };
//! use siqr_models::support::grid::TimeGrid;
//!
//! let model = Siqr::default();
//! let solver = SolverConfig::default();
//!
//! let trajectory = model
//!     .solve(Compartments::initial(), &TimeGrid::default(), &solver)
//!     .unwrap();
//! let peaks = model
//!     .infection_peaks(&trajectory, &PeakConfig::default(), &solver)
//!     .unwrap();
//!
//! // The first infection peak falls before the first grid sample.
//! assert!(peaks[0].time < trajectory.times()[1]);
//! ```

pub mod models;
pub mod support;
