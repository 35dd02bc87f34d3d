//! Public models.
//!
//! # Organization
//!
//! Models are grouped into domain-specific submodules (currently `epidemic`).
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an internal
//! `core` submodule. The public model type is a thin adapter that delegates to
//! the core API and implements [`twine_core::Model`].

pub mod epidemic;
