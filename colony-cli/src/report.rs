//! JSON reports printed by the CLI.

use colony_core::{Diagnostics, OptimiseResponse, Place, Waypoint};
use serde::{Deserialize, Serialize};

/// Result of an `optimise` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimiseReport {
    /// Waypoints in visiting order.
    pub route: Vec<Waypoint>,
    /// Total great-circle distance in kilometres.
    pub distance_km: f64,
    /// Estimated CO₂ emissions in grams.
    pub emissions_grams: f64,
    /// Details about how the route was found.
    pub diagnostics: Diagnostics,
}

impl From<OptimiseResponse> for OptimiseReport {
    fn from(response: OptimiseResponse) -> Self {
        let OptimiseResponse { route, diagnostics } = response;
        let distance_km = route.distance_km();
        let emissions_grams = route.emissions_grams();
        Self {
            route: route.into_waypoints(),
            distance_km,
            emissions_grams,
            diagnostics,
        }
    }
}

/// Result of a `deliver` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// Restaurant the delivery starts from.
    pub restaurant: Place,
    /// Delivery location.
    pub destination: Waypoint,
    /// Names of every restaurant found, in lookup order.
    pub candidates: Vec<String>,
    /// Planned route from the restaurant to the destination.
    #[serde(flatten)]
    pub plan: OptimiseReport,
}
