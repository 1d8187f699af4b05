//! Derived cluster geometry for map rendering

use crate::geo::distance::Coordinate;
use crate::models::location::LocationRecord;

/// Mean latitude and mean longitude over the members.
///
/// Returns `None` for an empty slice.
pub fn centroid(members: &[LocationRecord]) -> Option<Coordinate> {
    if members.is_empty() {
        return None;
    }

    let n = members.len() as f64;
    let (lat_sum, lon_sum) = members.iter().fold((0.0, 0.0), |(lat, lon), m| {
        (lat + m.latitude, lon + m.longitude)
    });

    Some(Coordinate::new(lat_sum / n, lon_sum / n))
}

/// Largest distance in meters from `center` to any member (0 when empty)
pub fn bounding_radius_m(center: &Coordinate, members: &[LocationRecord]) -> f64 {
    members
        .iter()
        .map(|m| center.distance_to(&m.coordinate()))
        .fold(0.0, f64::max)
}
