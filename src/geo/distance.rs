//! Haversine distance on a spherical earth

use serde::{Deserialize, Serialize};

/// Mean earth radius used by the spherical approximation
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to another coordinate in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_meters(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

/// Great-circle distance between two points, in meters.
///
/// Inputs are not range-checked; out-of-range degrees still produce a finite
/// (if meaningless) number.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = lat2_rad - lat1_rad;
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    km_to_meters(EARTH_RADIUS_KM * c)
}

/// Pairwise distance between two coordinates, in meters
pub trait DistanceMetric {
    fn distance_m(&self, a: &Coordinate, b: &Coordinate) -> f64;
}

/// Spherical-earth haversine metric
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_m(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        haversine_meters(a.latitude, a.longitude, b.latitude, b.longitude)
    }
}
