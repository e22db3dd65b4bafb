//! Disposal site selection.

use crate::geometry::Planar;
use crate::model::{Landfill, RoutePlan, Stop};
use crate::traits::DistanceMetric;

/// Pick the landfill a vehicle should visit after `stop` fills it.
///
/// Candidates are the sites that accept the stop's material (all sites when
/// the material is unset). A preferred landfill among the candidates wins
/// outright; otherwise the nearest candidate wins, earliest in the catalog on
/// ties. Returns `None` when no site accepts the material.
///
/// `route` is the route built so far. It does not influence the choice yet.
pub fn choose_landfill<'a>(
    stop: &Stop,
    landfills: &'a [Landfill],
    route: &RoutePlan,
) -> Option<&'a Landfill> {
    choose_landfill_with(&Planar, stop, landfills, route)
}

/// [`choose_landfill`] ranked by an arbitrary metric.
pub fn choose_landfill_with<'a, M>(
    metric: &M,
    stop: &Stop,
    landfills: &'a [Landfill],
    _route: &RoutePlan,
) -> Option<&'a Landfill>
where
    M: DistanceMetric,
{
    let material = stop.material.as_deref();
    let candidates: Vec<&Landfill> = landfills
        .iter()
        .filter(|landfill| landfill.accepts_material(material))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    if let Some(preferred) = stop.preferred_landfill_id.as_deref() {
        if let Some(landfill) = candidates.iter().find(|landfill| landfill.id == preferred) {
            return Some(*landfill);
        }
    }

    let mut best: Option<(&Landfill, f64)> = None;
    for landfill in candidates {
        let d = metric.distance(stop.point, landfill.point);
        // Strict less-than keeps the earliest catalog entry on ties.
        if best.is_none_or(|(_, best_d)| d.total_cmp(&best_d).is_lt()) {
            best = Some((landfill, d));
        }
    }

    best.map(|(landfill, _)| landfill)
}
