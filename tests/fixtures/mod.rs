//! Test fixtures for landfill-router.
//!
//! Provides:
//! - Las Vegas / Henderson job sites and disposal sites
//! - Builders for routes and stops

#![allow(dead_code, unused_imports)]

pub mod las_vegas_sites;

pub use las_vegas_sites::*;

use landfill_router::{Landfill, Point, RoutePlan, Stop, StopKind};

pub fn route(capacity: i32, stops: Vec<Stop>) -> RoutePlan {
    let mut plan = RoutePlan::new("2026-10-16", "driver-1", Point::new(0.0, 0.0), capacity);
    plan.stops = stops;
    plan
}

pub fn pickup(id: &str, lat: f64, lon: f64) -> Stop {
    Stop::new(id, StopKind::Pickup, Point::new(lat, lon))
}

pub fn exchange(id: &str, lat: f64, lon: f64) -> Stop {
    Stop::new(id, StopKind::Exchange, Point::new(lat, lon))
}

pub fn drop_off(id: &str, lat: f64, lon: f64) -> Stop {
    Stop::new(id, StopKind::Drop, Point::new(lat, lon))
}

pub fn service(id: &str, lat: f64, lon: f64) -> Stop {
    Stop::new(id, StopKind::Service, Point::new(lat, lon))
}

/// A landfill that takes anything.
pub fn open_landfill(id: &str, lat: f64, lon: f64) -> Landfill {
    Landfill::new(id, id, Point::new(lat, lon))
}

pub fn ids(plan: &RoutePlan) -> Vec<&str> {
    plan.stops.iter().map(|stop| stop.id.as_str()).collect()
}

/// Largest number of capacity-consuming stops between consecutive dumps.
pub fn max_load_between_dumps(plan: &RoutePlan) -> i32 {
    let mut load = 0;
    let mut max_load = 0;
    for stop in &plan.stops {
        if stop.kind == StopKind::Dump {
            load = 0;
        } else if stop.kind.consumes_capacity() {
            load += 1;
            max_load = max_load.max(load);
        }
    }
    max_load
}
