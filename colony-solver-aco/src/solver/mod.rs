//! `ColonyOptimiser` and the free-function entry points.

use std::time::Instant;

use colony_core::{
    Diagnostics, OptimiseError, OptimiseRequest, OptimiseResponse, Route, RouteOptimiser, Waypoint,
};

use crate::ColonyConfig;
use crate::colony::{Colony, entropy_seed};

/// Route optimiser driven by an ant colony.
///
/// The first waypoint of every request is the fixed start of the route. The
/// returned route does not return to the start.
///
/// # Examples
/// ```
/// use colony_core::{OptimiseRequest, RouteOptimiser, Waypoint};
/// use colony_solver_aco::{ColonyConfig, ColonyOptimiser};
///
/// let optimiser = ColonyOptimiser::new(ColonyConfig::default().with_iterations(5));
/// let request = OptimiseRequest {
///     waypoints: vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)],
///     seed: Some(1),
/// };
/// let response = optimiser.optimise(&request)?;
/// assert_eq!(response.route.start(), Some(Waypoint::new(0.0, 0.0)));
/// # Ok::<(), colony_core::OptimiseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColonyOptimiser {
    config: ColonyConfig,
}

impl ColonyOptimiser {
    /// Construct an optimiser with the given configuration.
    ///
    /// The configuration is validated on every call to
    /// [`optimise`](RouteOptimiser::optimise).
    #[must_use]
    pub const fn new(config: ColonyConfig) -> Self {
        Self { config }
    }

    /// Configuration used for each run.
    #[must_use]
    pub const fn config(&self) -> &ColonyConfig {
        &self.config
    }
}

impl RouteOptimiser for ColonyOptimiser {
    fn optimise(&self, request: &OptimiseRequest) -> Result<OptimiseResponse, OptimiseError> {
        self.config.validate()?;
        request.validate()?;
        let started_at = Instant::now();
        let seed = request.seed.unwrap_or_else(entropy_seed);

        let outcome = Colony::new(&request.waypoints, self.config).run(seed)?;
        let waypoints = outcome
            .tour
            .iter()
            .filter_map(|index| request.waypoints.get(*index).copied())
            .collect();

        Ok(OptimiseResponse {
            route: Route::new(waypoints, outcome.length),
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                iterations: self.config.iterations,
                ants: self.config.ants,
                degenerate_constructions: outcome.degenerate_constructions,
                best_iteration: outcome.best_iteration,
                best_distance_history: outcome.best_distance_history,
            },
        })
    }
}

/// Order `waypoints` into a short route starting at the first waypoint.
///
/// The run is seeded from entropy, so repeated calls may return different
/// routes of similar length.
///
/// # Errors
///
/// Returns [`OptimiseError::InvalidConfiguration`] for an unusable `config`,
/// [`OptimiseError::InsufficientWaypoints`] for fewer than two waypoints and
/// [`OptimiseError::DegenerateConstruction`] when no ant completed a route.
///
/// # Examples
/// ```
/// use colony_core::Waypoint;
/// use colony_solver_aco::{ColonyConfig, optimize_route};
///
/// let waypoints = [Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)];
/// let route = optimize_route(&waypoints, ColonyConfig::default())?;
/// assert!((route.distance_km() - 111.19).abs() < 0.01);
/// # Ok::<(), colony_core::OptimiseError>(())
/// ```
pub fn optimize_route(waypoints: &[Waypoint], config: ColonyConfig) -> Result<Route, OptimiseError> {
    optimise_with(waypoints, config, None)
}

/// Order `waypoints` using a reproducible run seeded with `seed`.
///
/// # Errors
///
/// Fails under the same conditions as [`optimize_route`].
pub fn optimize_route_seeded(
    waypoints: &[Waypoint],
    config: ColonyConfig,
    seed: u64,
) -> Result<Route, OptimiseError> {
    optimise_with(waypoints, config, Some(seed))
}

fn optimise_with(
    waypoints: &[Waypoint],
    config: ColonyConfig,
    seed: Option<u64>,
) -> Result<Route, OptimiseError> {
    let request = OptimiseRequest {
        waypoints: waypoints.to_vec(),
        seed,
    };
    ColonyOptimiser::new(config)
        .optimise(&request)
        .map(|response| response.route)
}
