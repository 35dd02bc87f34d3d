//! Epidemic compartmental models.

pub mod siqr;
