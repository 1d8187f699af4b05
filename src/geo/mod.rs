//! Great-circle distance and cluster geometry.

pub mod distance;
pub mod geometry;

pub use distance::*;
pub use geometry::*;
