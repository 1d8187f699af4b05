//! Shared data models spanning ingestion, clustering and summaries.

pub mod cluster;
pub mod location;

pub use cluster::Cluster;
pub use location::{LocationRecord, RawLocationRow, SignalValue};
