//! Waypoint fixtures shared by unit tests, behaviour tests and benchmarks.

use colony_core::Waypoint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Two points one degree of longitude apart on the equator.
#[must_use]
pub fn equator_pair() -> Vec<Waypoint> {
    vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)]
}

/// Corners of a one-degree square at the origin, listed so that the input
/// order crosses the square diagonally.
///
/// The shortest open route from the origin walks three edges, roughly
/// 333.6 km.
#[must_use]
pub fn unit_square() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(1.0, 1.0),
        Waypoint::new(0.0, 1.0),
        Waypoint::new(1.0, 0.0),
    ]
}

/// `count` deterministic waypoints within a degree of the origin.
#[must_use]
pub fn scattered_waypoints(count: usize, seed: u64) -> Vec<Waypoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Waypoint::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}
