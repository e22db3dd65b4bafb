//! Seams between the planner and its collaborators.
//!
//! Both are intentionally minimal. The planner only ranks candidates
//! relative to each other, so a metric only has to be consistent, not
//! physically meaningful.

use crate::geometry::Point;

/// Measures the cost of moving between two points.
///
/// Implementations must be pure: the same pair always yields the same value.
pub trait DistanceMetric {
    fn distance(&self, from: Point, to: Point) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, from: Point, to: Point) -> f64 {
        (**self).distance(from, to)
    }
}

/// Supplies identifiers for synthetic stops inserted by the planner.
///
/// Ids only need to be unique within one planning call. The planner skips
/// ids that collide with input stops, so a source must keep producing new
/// values.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

impl<F> IdSource for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}
