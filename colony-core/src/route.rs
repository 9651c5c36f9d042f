//! Ordered routes through waypoints.
//!
//! Aggregates ordered waypoints with their total great-circle length.

use crate::{Waypoint, emissions_grams};

/// An ordered path through waypoints with its total distance.
///
/// # Examples
/// ```
/// use colony_core::{Route, Waypoint};
///
/// let route = Route::new(
///     vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)],
///     111.2,
/// );
/// assert_eq!(route.waypoints().len(), 2);
/// assert_eq!(route.start(), Some(Waypoint::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Waypoint>,
    distance_km: f64,
}

impl Route {
    /// Construct a route from ordered waypoints and its distance.
    #[must_use]
    pub const fn new(waypoints: Vec<Waypoint>, distance_km: f64) -> Self {
        Self {
            waypoints,
            distance_km,
        }
    }

    /// Waypoints in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Total great-circle distance in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// First waypoint, if any.
    #[must_use]
    pub fn start(&self) -> Option<Waypoint> {
        self.waypoints.first().copied()
    }

    /// Last waypoint, if any.
    #[must_use]
    pub fn end(&self) -> Option<Waypoint> {
        self.waypoints.last().copied()
    }

    /// Estimated grams of CO₂ for travelling the route.
    #[must_use]
    pub fn emissions_grams(&self) -> f64 {
        emissions_grams(self.distance_km)
    }

    /// Consume the route, returning its waypoints.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}
