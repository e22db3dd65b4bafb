//! landfill-router core
//!
//! Single-vehicle route planning with capacity-triggered disposal visits.

pub mod error;
pub mod geometry;
pub mod haversine;
pub mod ids;
pub mod landfill;
pub mod model;
pub mod polyline;
pub mod solver;
pub mod traits;

pub use geometry::{Point, distance};
pub use landfill::choose_landfill;
pub use model::{AssetType, Landfill, RoutePlan, RoutingOptions, Stop, StopKind};
pub use solver::plan_simple;
