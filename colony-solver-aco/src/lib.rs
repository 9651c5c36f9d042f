//! Ant colony optimiser for ordering waypoints into short routes.
//!
//! This crate provides [`ColonyOptimiser`], an implementation of the
//! [`RouteOptimiser`](colony_core::RouteOptimiser) trait, and the free
//! functions [`optimize_route`] and [`optimize_route_seeded`].
//!
//! Each iteration releases a fixed number of ants from the first waypoint.
//! Ants choose their next waypoint with probability proportional to
//! `pheromone^alpha * (1 / distance)^beta`, so short, well-travelled legs are
//! preferred. After all ants finish, pheromone evaporates and every complete
//! route deposits `1 / length` on each of its legs. The shortest route seen
//! across all iterations is returned.
//!
//! Ants within an iteration run in parallel on the `rayon` pool. Every ant
//! owns an RNG seeded from the run's master RNG before the parallel phase, so
//! a seeded run returns the same route regardless of thread count.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod ant;
mod colony;
mod config;
mod distances;
mod pheromone;
mod solver;
#[doc(hidden)]
pub mod test_support;

pub use config::ColonyConfig;
pub use solver::{ColonyOptimiser, optimize_route, optimize_route_seeded};
