use std::time::Duration;

use thiserror::Error;

use crate::{Route, Waypoint};

/// Fewest waypoints an optimiser can order.
pub const MIN_WAYPOINTS: usize = 2;

/// Parameters for an optimisation request.
///
/// The first waypoint is the fixed start of the route. The seed, when
/// present, makes the stochastic search reproducible.
///
/// # Examples
/// ```rust
/// use colony_core::{OptimiseRequest, Waypoint};
///
/// let request = OptimiseRequest {
///     waypoints: vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)],
///     seed: Some(7),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimiseRequest {
    /// Waypoints to order; index 0 is the start.
    pub waypoints: Vec<Waypoint>,
    /// Seed for reproducible stochastic components.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl OptimiseRequest {
    /// Check that the request contains enough waypoints to build a route.
    ///
    /// # Errors
    ///
    /// Returns [`OptimiseError::InsufficientWaypoints`] when fewer than
    /// [`MIN_WAYPOINTS`] are supplied.
    pub fn validate(&self) -> Result<(), OptimiseError> {
        if self.waypoints.len() < MIN_WAYPOINTS {
            return Err(OptimiseError::InsufficientWaypoints {
                found: self.waypoints.len(),
            });
        }
        Ok(())
    }
}

/// Summary of a completed optimisation run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent optimising.
    pub solve_time: Duration,
    /// Iterations executed.
    pub iterations: usize,
    /// Ants released per iteration.
    pub ants: usize,
    /// Constructions that stalled before visiting every waypoint.
    pub degenerate_constructions: usize,
    /// One-based iteration at which the best route was first found.
    pub best_iteration: usize,
    /// Best distance known at the end of each iteration, in kilometres,
    /// starting from the first iteration that completed a route.
    pub best_distance_history: Vec<f64>,
}

/// Response from a successful optimisation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimiseResponse {
    /// The shortest route found.
    pub route: Route,
    /// Details about how the route was found.
    pub diagnostics: Diagnostics,
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The iteration count was zero.
    #[error("iterations must be positive")]
    ZeroIterations,
    /// The ant count was zero.
    #[error("ants per iteration must be positive")]
    ZeroAnts,
    /// The evaporation rate fell outside `[0, 1]`.
    #[error("evaporation rate {0} must lie within [0, 1]")]
    EvaporationRateOutOfRange(f64),
    /// A weighting exponent was NaN or infinite.
    #[error("{name} must be a finite number")]
    NonFiniteExponent {
        /// Name of the offending exponent.
        name: &'static str,
    },
}

/// Errors returned by [`RouteOptimiser::optimise`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimiseError {
    /// Optimiser parameters were malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    /// Too few waypoints were supplied to form a route.
    #[error("at least {min} waypoints are required, found {found}", min = MIN_WAYPOINTS)]
    InsufficientWaypoints {
        /// Number of waypoints supplied.
        found: usize,
    },
    /// Every route construction stalled before visiting all waypoints.
    #[error("no complete route was constructed in {iterations} iterations")]
    DegenerateConstruction {
        /// Iterations executed before giving up.
        iterations: usize,
    },
}

/// Order waypoints into a short route.
///
/// Implementations should return [`OptimiseError`] variants for invalid
/// input rather than panicking. Optimisers must be `Send + Sync` so that
/// independent runs can proceed on separate threads.
pub trait RouteOptimiser: Send + Sync {
    /// Optimise a request, producing a route or an error.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimiseError`] when the request or the optimiser's
    /// configuration is unusable, or when no complete route was built.
    fn optimise(&self, request: &OptimiseRequest) -> Result<OptimiseResponse, OptimiseError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct StraightLineOptimiser;

    impl RouteOptimiser for StraightLineOptimiser {
        fn optimise(&self, request: &OptimiseRequest) -> Result<OptimiseResponse, OptimiseError> {
            request.validate()?;
            let distance = crate::route_length_km(&request.waypoints);
            Ok(OptimiseResponse {
                route: Route::new(request.waypoints.clone(), distance),
                diagnostics: Diagnostics::default(),
            })
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_fewer_than_two_waypoints(#[case] count: usize) {
        let request = OptimiseRequest {
            waypoints: vec![Waypoint::new(0.0, 0.0); count],
            seed: None,
        };
        let err = StraightLineOptimiser
            .optimise(&request)
            .expect_err("too few waypoints");
        assert_eq!(err, OptimiseError::InsufficientWaypoints { found: count });
    }

    #[rstest]
    fn accepts_two_waypoints() {
        let request = OptimiseRequest {
            waypoints: vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)],
            seed: Some(1),
        };
        let response = StraightLineOptimiser
            .optimise(&request)
            .expect("valid request");
        assert_eq!(response.route.waypoints().len(), 2);
    }

    #[rstest]
    fn configuration_errors_convert() {
        let err = OptimiseError::from(ConfigurationError::ZeroAnts);
        assert_eq!(
            err.to_string(),
            "invalid configuration: ants per iteration must be positive"
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_seed_defaults_to_none() {
        let request: OptimiseRequest = serde_json::from_str(
            r#"{ "waypoints": [{ "lat": 0.0, "lon": 0.0 }, { "lat": 0.0, "lon": 1.0 }] }"#,
        )
        .expect("decode request");
        assert_eq!(request.seed, None);
        assert_eq!(request.waypoints.len(), 2);
    }
}
