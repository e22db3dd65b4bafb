//! Great-circle distance metric.
//!
//! Not used for ranking by default: the planner's orderings are defined in
//! terms of the planar metric. This is for reporting travel length in
//! kilometres, or for callers that explicitly opt into geodesic ranking.

use crate::geometry::Point;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Haversine {
    /// Calculate haversine distance between two points in kilometers.
    pub fn km(from: Point, to: Point) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lon = (to.lon - from.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: Point, to: Point) -> f64 {
        Self::km(from, to)
    }
}
