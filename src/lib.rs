//! Proximity clustering of geolocated device records with per-cluster
//! signal summaries.

pub mod clustering;
pub mod config;
pub mod core;
pub mod geo;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod signals;
pub mod summary;
