//! Route geometry for driver display.
//!
//! The dispatch layer draws the planned route as a line from the yard
//! through each stop in order. Encoding to a compact wire format happens
//! at that boundary, not here.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::RoutePlan;
use crate::traits::DistanceMetric;

/// An ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Yard first, then every stop in route order.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let points = std::iter::once(plan.yard)
            .chain(plan.stops.iter().map(|stop| stop.point))
            .collect();
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Sum of leg lengths under `metric`.
    pub fn length<M: DistanceMetric>(&self, metric: &M) -> f64 {
        self.points
            .windows(2)
            .map(|leg| metric.distance(leg[0], leg[1]))
            .sum()
    }
}
