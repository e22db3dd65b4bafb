//! Planner data model.
//!
//! Field names serialise in camelCase so the dispatch layer can exchange
//! these as JSON without a translation step.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::geometry::Point;

/// Default multiplier applied to candidate distances.
pub const DEFAULT_DETOUR_COEFFICIENT: f64 = 1.0;

/// A disposal site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landfill {
    pub id: String,
    pub name: String,
    pub point: Point,
    /// Material codes the site will take.
    #[serde(default)]
    pub accepts: BTreeSet<String>,
}

impl Landfill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, point: Point) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            point,
            accepts: BTreeSet::new(),
        }
    }

    pub fn accepting<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepts.extend(materials.into_iter().map(Into::into));
        self
    }

    /// Whether this site takes `material`. An unset material matches any site.
    pub fn accepts_material(&self, material: Option<&str>) -> bool {
        material.is_none_or(|code| self.accepts.contains(code))
    }
}

/// What happens at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Drop,
    Pickup,
    Exchange,
    Service,
    /// Disposal visit inserted by the planner.
    Dump,
}

impl StopKind {
    /// Pickups and exchanges load the vehicle; everything else leaves it as is.
    pub const fn consumes_capacity(self) -> bool {
        matches!(self, StopKind::Pickup | StopKind::Exchange)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "rolloff")]
    Rolloff,
    #[serde(rename = "port-a-john")]
    PortAJohn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    pub kind: StopKind,
    pub point: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// On a dump stop, the landfill that was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_landfill_id: Option<String>,
}

impl Stop {
    pub fn new(id: impl Into<String>, kind: StopKind, point: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            point,
            asset_type: None,
            size: None,
            material: None,
            preferred_landfill_id: None,
        }
    }

    pub fn asset(mut self, asset_type: AssetType, size: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type);
        self.size = Some(size.into());
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn preferred_landfill(mut self, landfill_id: impl Into<String>) -> Self {
        self.preferred_landfill_id = Some(landfill_id.into());
        self
    }
}

/// One driver's day.
///
/// On input `stops` is the unordered work list; on output it is the ordered
/// route including inserted dump stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub date: String,
    pub driver_id: String,
    pub yard: Point,
    /// Capacity-consuming stops servable between disposal visits.
    pub capacity: i32,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl RoutePlan {
    pub fn new(date: impl Into<String>, driver_id: impl Into<String>, yard: Point, capacity: i32) -> Self {
        Self {
            date: date.into(),
            driver_id: driver_id.into(),
            yard,
            capacity,
            stops: Vec::new(),
        }
    }

    /// Same header, different stops.
    pub fn with_stops(&self, stops: Vec<Stop>) -> Self {
        Self {
            date: self.date.clone(),
            driver_id: self.driver_id.clone(),
            yard: self.yard,
            capacity: self.capacity,
            stops,
        }
    }

    pub fn dump_count(&self) -> usize {
        self.stops.iter().filter(|stop| stop.kind == StopKind::Dump).count()
    }

    /// Reject inputs the planner would otherwise accept silently.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.capacity < 0 {
            return Err(PlanError::NegativeCapacity {
                capacity: self.capacity,
            });
        }

        let mut seen = HashSet::new();
        for stop in &self.stops {
            if stop.kind == StopKind::Dump {
                return Err(PlanError::DumpStopSupplied {
                    stop_id: stop.id.clone(),
                });
            }
            if !seen.insert(stop.id.as_str()) {
                return Err(PlanError::DuplicateStopId {
                    stop_id: stop.id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Caller tuning knobs. Absent fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingOptions {
    /// Multiplier on candidate distance when ranking the next stop.
    pub detour_coefficient: f64,
    /// Upper bound on output length, dump stops included. `None` is unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stops: Option<usize>,
    /// Also visit a landfill after the final load of the day.
    pub trailing_dump: bool,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            detour_coefficient: DEFAULT_DETOUR_COEFFICIENT,
            max_stops: None,
            trailing_dump: false,
        }
    }
}

/// Options after normalisation; every knob has a concrete value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub detour_coefficient: f64,
    pub max_stops: usize,
    pub trailing_dump: bool,
}

impl RoutingOptions {
    /// Normalise caller options against defaults.
    ///
    /// A non-finite coefficient falls back to the default rather than
    /// poisoning every comparison.
    pub fn resolve(options: Option<&RoutingOptions>) -> ResolvedOptions {
        let defaults = RoutingOptions::default();
        let options = options.unwrap_or(&defaults);

        let detour_coefficient = if options.detour_coefficient.is_finite() {
            options.detour_coefficient
        } else {
            DEFAULT_DETOUR_COEFFICIENT
        };

        ResolvedOptions {
            detour_coefficient,
            max_stops: options.max_stops.unwrap_or(usize::MAX),
            trailing_dump: options.trailing_dump,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.detour_coefficient.is_finite() {
            Ok(())
        } else {
            Err(PlanError::InvalidDetourCoefficient {
                value: self.detour_coefficient,
            })
        }
    }
}
