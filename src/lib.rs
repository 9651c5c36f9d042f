//! Facade crate for colony route planning.
//!
//! This crate re-exports the core domain types and exposes the ant colony
//! optimiser behind the `solver-aco` feature flag.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use colony_core::{
    ConfigurationError, Diagnostics, Geocoder, LookupError, MIN_WAYPOINTS, OptimiseError,
    OptimiseRequest, OptimiseResponse, Place, PlaceLookup, Route, RouteOptimiser, Waypoint,
    emissions_grams, haversine_km, route_length_km,
};

#[cfg(feature = "solver-aco")]
#[cfg_attr(docsrs, doc(cfg(feature = "solver-aco")))]
pub use colony_solver_aco::{
    ColonyConfig, ColonyOptimiser, optimize_route, optimize_route_seeded,
};
