//! Route assembly (greedy nearest-neighbour with disposal detours).

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace, warn};

use crate::error::PlanError;
use crate::geometry::{Planar, Point};
use crate::ids::SequentialIds;
use crate::landfill::choose_landfill_with;
use crate::model::{Landfill, RoutePlan, RoutingOptions, Stop, StopKind};
use crate::traits::{DistanceMetric, IdSource};

/// Something the planner absorbed instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlanWarning {
    /// Capacity ran out but no landfill accepts the material. No dump stop
    /// was inserted; capacity was reset anyway.
    #[serde(rename_all = "camelCase")]
    NoLandfill {
        stop_id: String,
        material: Option<String>,
    },
    /// The stop limit was reached before every input stop was routed.
    #[serde(rename_all = "camelCase")]
    Truncated { routed: usize, requested: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: RoutePlan,
    pub warnings: Vec<PlanWarning>,
}

/// Order a driver's stops, inserting dump stops whenever capacity runs out.
///
/// Always returns a plan. Missing landfills and the stop limit degrade the
/// result silently; use [`plan_with`] to see what was absorbed.
pub fn plan_simple(
    route: &RoutePlan,
    landfills: &[Landfill],
    options: Option<&RoutingOptions>,
) -> RoutePlan {
    plan_with(route, landfills, options, &Planar, &mut SequentialIds::default()).plan
}

/// Validate the inputs, then plan.
pub fn plan_checked(
    route: &RoutePlan,
    landfills: &[Landfill],
    options: Option<&RoutingOptions>,
) -> Result<PlanOutcome, PlanError> {
    route.validate()?;
    if let Some(options) = options {
        options.validate()?;
    }
    Ok(plan_with(route, landfills, options, &Planar, &mut SequentialIds::default()))
}

/// Plan every driver's route independently, in parallel.
///
/// Results come back in the same order as `routes`.
pub fn plan_fleet(
    routes: &[RoutePlan],
    landfills: &[Landfill],
    options: Option<&RoutingOptions>,
) -> Vec<RoutePlan> {
    routes
        .par_iter()
        .map(|route| plan_simple(route, landfills, options))
        .collect()
}

/// Core planning loop with an explicit metric and id source.
pub fn plan_with<M, I>(
    route: &RoutePlan,
    landfills: &[Landfill],
    options: Option<&RoutingOptions>,
    metric: &M,
    ids: &mut I,
) -> PlanOutcome
where
    M: DistanceMetric,
    I: IdSource,
{
    let _span = debug_span!(
        "plan_route",
        driver_id = %route.driver_id,
        date = %route.date,
        stops = route.stops.len()
    )
    .entered();

    let options = RoutingOptions::resolve(options);
    let mut warnings = Vec::new();

    let mut remaining_capacity = route.capacity;
    let mut current = route.yard;
    // Original position travels with each stop so ties resolve the same way
    // regardless of removal order.
    let mut remaining: Vec<(usize, &Stop)> = route.stops.iter().enumerate().collect();
    let mut output: Vec<Stop> = Vec::with_capacity(route.stops.len());
    let mut pending_loads = route
        .stops
        .iter()
        .filter(|stop| stop.kind.consumes_capacity())
        .count();
    // Ids already on the route; generated ids must avoid them.
    let mut taken: HashSet<String> = route.stops.iter().map(|stop| stop.id.clone()).collect();
    // Header for lending the output to the landfill selector.
    let mut partial = route.with_stops(Vec::new());

    while !remaining.is_empty() && output.len() < options.max_stops {
        let Some(pick) = nearest(&remaining, current, options.detour_coefficient, metric) else {
            break;
        };
        let (_, stop) = remaining.swap_remove(pick);
        trace!(stop_id = %stop.id, "next stop");

        output.push(stop.clone());
        current = stop.point;

        if !stop.kind.consumes_capacity() {
            continue;
        }

        remaining_capacity = remaining_capacity.saturating_sub(1);
        pending_loads -= 1;
        if remaining_capacity > 0 {
            continue;
        }

        // TODO: confirm with dispatch whether capacity should reset when no
        // landfill is found; kept for fixture compatibility.
        remaining_capacity = route.capacity;

        if pending_loads == 0 && !options.trailing_dump {
            trace!(after = %stop.id, "final load; no dump needed");
            continue;
        }

        // Lend the output to the selector as the route built so far.
        partial.stops = std::mem::take(&mut output);
        let chosen = choose_landfill_with(metric, stop, landfills, &partial);
        output = std::mem::take(&mut partial.stops);

        match chosen {
            Some(landfill) if output.len() < options.max_stops => {
                let dump = dump_stop(fresh_id(ids, &mut taken), stop, landfill);
                debug!(
                    after = %stop.id,
                    dump_id = %dump.id,
                    landfill_id = %landfill.id,
                    "capacity exhausted; inserting dump"
                );
                output.push(dump);
                current = landfill.point;
            }
            Some(landfill) => {
                debug!(landfill_id = %landfill.id, "stop limit reached; dump omitted");
            }
            None => {
                warn!(
                    stop_id = %stop.id,
                    material = stop.material.as_deref().unwrap_or("<any>"),
                    "no landfill accepts material; continuing without dump"
                );
                warnings.push(PlanWarning::NoLandfill {
                    stop_id: stop.id.clone(),
                    material: stop.material.clone(),
                });
            }
        }
    }

    if !remaining.is_empty() {
        let routed = route.stops.len() - remaining.len();
        debug!(routed, requested = route.stops.len(), "stop limit truncated route");
        warnings.push(PlanWarning::Truncated {
            routed,
            requested: route.stops.len(),
        });
    }

    PlanOutcome {
        plan: route.with_stops(output),
        warnings,
    }
}

/// Index into `remaining` of the cheapest next stop.
///
/// Ranks by weighted distance, then by original list position.
fn nearest<M: DistanceMetric>(
    remaining: &[(usize, &Stop)],
    from: Point,
    detour_coefficient: f64,
    metric: &M,
) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .map(|(slot, (original, stop))| {
            let cost = metric.distance(from, stop.point) * detour_coefficient;
            (slot, cost, *original)
        })
        .min_by(|a, b| rank((a.1, a.2), (b.1, b.2)))
        .map(|(slot, _, _)| slot)
}

fn rank(a: (f64, usize), b: (f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Draw from `ids` until it yields an id not already on the route.
fn fresh_id<I: IdSource>(ids: &mut I, taken: &mut HashSet<String>) -> String {
    loop {
        let id = ids.next_id();
        if taken.insert(id.clone()) {
            return id;
        }
        trace!(id = %id, "generated id already in use; drawing again");
    }
}

fn dump_stop(id: String, exhausted: &Stop, landfill: &Landfill) -> Stop {
    Stop {
        id,
        kind: StopKind::Dump,
        point: landfill.point,
        asset_type: None,
        size: None,
        material: exhausted.material.clone(),
        preferred_landfill_id: Some(landfill.id.clone()),
    }
}
