//! Great-circle distances between waypoints.
//!
//! Distances use the haversine formula over a spherical Earth with a mean
//! radius of [`EARTH_RADIUS_KM`]. Inputs are not range-checked.

use crate::Waypoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between `a` and `b` in kilometres.
///
/// The result is symmetric and zero for identical points.
///
/// # Examples
/// ```
/// use colony_core::{Waypoint, haversine_km};
///
/// let origin = Waypoint::new(0.0, 0.0);
/// let east = Waypoint::new(0.0, 1.0);
/// let km = haversine_km(origin, east);
/// assert!((km - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Waypoint, b: Waypoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total length of an open path through `points`, in kilometres.
///
/// Sums the `n - 1` consecutive legs; there is no return leg. Fewer than two
/// points yield `0.0`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "summing leg distances")]
pub fn route_length_km(points: &[Waypoint]) -> f64 {
    points
        .windows(2)
        .map(|leg| match leg {
            [from, to] => haversine_km(*from, *to),
            _ => 0.0,
        })
        .fold(0.0, |total, leg| total + leg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-9;

    #[rstest]
    #[case(Waypoint::new(0.0, 0.0))]
    #[case(Waypoint::new(51.5074, -0.1278))]
    #[case(Waypoint::new(-33.8688, 151.2093))]
    fn coincident_points_are_zero_apart(#[case] point: Waypoint) {
        assert!(haversine_km(point, point).abs() < TOLERANCE_KM);
    }

    #[rstest]
    #[case(Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0))]
    #[case(Waypoint::new(12.9716, 80.2750), Waypoint::new(13.0827, 80.2707))]
    #[case(Waypoint::new(89.0, 10.0), Waypoint::new(-89.0, -170.0))]
    fn distance_is_symmetric(#[case] a: Waypoint, #[case] b: Waypoint) {
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn one_degree_of_longitude_on_equator() {
        let km = haversine_km(Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0));
        assert!((km - 111.195).abs() < 0.001, "unexpected distance {km}");
    }

    #[rstest]
    fn antipodes_are_half_a_circumference_apart() {
        let km = haversine_km(Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 180.0));
        assert!((km - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[rstest]
    fn out_of_range_latitude_still_yields_a_number() {
        let km = haversine_km(Waypoint::new(120.0, 0.0), Waypoint::new(0.0, 0.0));
        assert!(km.is_finite());
    }

    #[rstest]
    fn route_length_sums_consecutive_legs_without_return() {
        let (first, second, third) = (
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(0.0, 2.0),
        );
        let points = [first, second, third];
        let expected = haversine_km(first, second) + haversine_km(second, third);
        assert!((route_length_km(&points) - expected).abs() < TOLERANCE_KM);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[Waypoint::new(4.0, 2.0)])]
    fn short_routes_have_zero_length(#[case] points: &[Waypoint]) {
        assert!(route_length_km(points).abs() < TOLERANCE_KM);
    }
}
