//! Las Vegas / Henderson sites for realistic fixtures.
//!
//! Job sites reuse real commercial addresses; disposal sites are the
//! regional landfill and transfer stations serving the valley.

use landfill_router::{AssetType, Landfill, Point, RoutePlan, Stop, StopKind};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

pub const YARD: Location = Location::new("North Las Vegas Yard", 36.2380, -115.1180);

// ============================================================================
// Job Sites
// ============================================================================

pub const JOB_SITES: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Location::new("Beers and Bets", 36.1428945, -115.1573836),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("Budget Suites South", 36.0366259, -115.1713361),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
];

// ============================================================================
// Disposal Sites
// ============================================================================

pub fn landfills() -> Vec<Landfill> {
    vec![
        Landfill::new("apex", "Apex Regional Landfill", Point::new(36.3700, -114.9100))
            .accepting(["msw", "c&d", "green"]),
        Landfill::new("henderson-ts", "Henderson Transfer Station", Point::new(36.0420, -114.9730))
            .accepting(["msw"]),
        Landfill::new("cheyenne-ts", "Cheyenne Transfer Station", Point::new(36.2180, -115.0940))
            .accepting(["msw", "c&d"]),
    ]
}

/// A driver's day across the valley: rolloff pulls and swaps mixed with
/// portable toilet service.
pub fn valley_day(capacity: i32) -> RoutePlan {
    let mut plan = RoutePlan::new("2026-10-16", "driver-7", YARD.point(), capacity);
    plan.stops = JOB_SITES
        .iter()
        .enumerate()
        .map(|(i, site)| {
            let id = format!("job-{:02}", i);
            match i % 4 {
                0 => Stop::new(id, StopKind::Pickup, site.point())
                    .asset(AssetType::Rolloff, "30yd")
                    .material("c&d"),
                1 => Stop::new(id, StopKind::Exchange, site.point())
                    .asset(AssetType::Rolloff, "20yd")
                    .material("msw"),
                2 => Stop::new(id, StopKind::Service, site.point()).asset(AssetType::PortAJohn, "standard"),
                _ => Stop::new(id, StopKind::Drop, site.point()).asset(AssetType::Rolloff, "10yd"),
            }
        })
        .collect();
    plan
}
