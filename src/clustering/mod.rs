//! Proximity clustering of validated location records.

pub mod proximity;

pub use proximity::*;
