//! Boundary validation of raw rows into location records.

pub mod error;
pub mod validation;

pub use error::ValidationError;
pub use validation::*;
