//! Errors raised when a route fails boundary validation.
//!
//! Planning itself never fails; these only come from
//! [`RoutePlan::validate`](crate::model::RoutePlan::validate) and
//! [`plan_checked`](crate::solver::plan_checked).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Capacity below zero has no meaningful disposal cadence.
    #[error("route capacity {capacity} is negative")]
    NegativeCapacity { capacity: i32 },
    /// Dump stops are inserted by the planner, never supplied.
    #[error("stop {stop_id} is a dump stop; dump stops are synthesised by the planner")]
    DumpStopSupplied { stop_id: String },
    /// Two input stops share an id.
    #[error("stop id {stop_id} appears more than once")]
    DuplicateStopId { stop_id: String },
    /// Detour coefficient must be a finite number.
    #[error("detour coefficient {value} is not finite")]
    InvalidDetourCoefficient { value: f64 },
}
