//! Signal parsing and per-cluster aggregation.

pub mod aggregation;
pub mod categories;
pub mod parser;

pub use aggregation::*;
pub use categories::*;
pub use parser::*;
