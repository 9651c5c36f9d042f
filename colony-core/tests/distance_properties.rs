//! Property tests for the great-circle metric.

use colony_core::{EARTH_RADIUS_KM, Waypoint, haversine_km, route_length_km};
use proptest::prelude::*;

fn waypoint() -> impl Strategy<Value = Waypoint> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lon)| Waypoint::new(lat, lon))
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in waypoint(), b in waypoint()) {
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(a in waypoint(), b in waypoint()) {
        let distance = haversine_km(a, b);
        prop_assert!(distance >= 0.0);
        prop_assert!(distance <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn route_length_sums_consecutive_legs(points in prop::collection::vec(waypoint(), 0..8)) {
        let expected: f64 = points
            .windows(2)
            .map(|pair| match pair {
                [a, b] => haversine_km(*a, *b),
                _ => 0.0,
            })
            .sum();
        prop_assert!((route_length_km(&points) - expected).abs() < 1e-6);
    }
}
