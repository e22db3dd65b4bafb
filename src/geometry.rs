//! Planar geometry used for ranking candidate stops.
//!
//! Latitude and longitude are treated as flat Cartesian coordinates. The
//! result is only meaningful as a relative signal over short spans; route
//! orderings depend on it staying this cheap and this simple.

use serde::{Deserialize, Serialize};

use crate::traits::DistanceMetric;

/// A coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Euclidean distance on raw lat/lon values. No geodesic correction.
pub fn distance(a: Point, b: Point) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// The default ranking metric, backed by [`distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl DistanceMetric for Planar {
    fn distance(&self, from: Point, to: Point) -> f64 {
        distance(from, to)
    }
}
