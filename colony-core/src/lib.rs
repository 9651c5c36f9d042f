//! Core domain types for colony route planning.
//!
//! The crate defines waypoints, routes, the great-circle distance metric and
//! the [`RouteOptimiser`] trait implemented by solver crates. It also declares
//! the [`Geocoder`] and [`PlaceLookup`] seams through which applications feed
//! waypoints into an optimiser.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod emissions;
pub mod lookup;
mod optimiser;
mod route;
#[doc(hidden)]
pub mod test_support;
mod waypoint;

pub use distance::{EARTH_RADIUS_KM, haversine_km, route_length_km};
pub use emissions::{CO2_GRAMS_PER_KM, emissions_grams};
pub use lookup::{Geocoder, LookupError, Place, PlaceLookup};
pub use optimiser::{
    ConfigurationError, Diagnostics, MIN_WAYPOINTS, OptimiseError, OptimiseRequest,
    OptimiseResponse, RouteOptimiser,
};
pub use route::Route;
pub use waypoint::Waypoint;
