//! Core application primitives (orchestrators)

pub mod pipeline;

pub use pipeline::*;
