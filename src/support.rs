//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.
//!
//! - [`constraint`]: Numeric invariants checked at construction
//! - [`grid`]: Evenly spaced sample grids
//! - [`plot`]: Time-series chart rendering

pub mod constraint;
pub mod grid;
pub mod plot;
