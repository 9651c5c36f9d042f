//! Golden route regression tests for the colony optimiser.
//!
//! Each case fixes the waypoints, configuration and seed so that changes to
//! construction or pheromone updates surface as changed distances.

use colony_core::{Waypoint, route_length_km};
use colony_solver_aco::test_support::{equator_pair, scattered_waypoints, unit_square};
use colony_solver_aco::{ColonyConfig, optimize_route_seeded};
use rstest::rstest;

#[rstest]
#[case::equator_pair(equator_pair(), 111.195)]
#[case::unit_square(unit_square(), 333.57)]
fn seeded_routes_reach_known_optimum(#[case] waypoints: Vec<Waypoint>, #[case] expected_km: f64) {
    for seed in [1_u64, 7, 99] {
        let route = optimize_route_seeded(&waypoints, ColonyConfig::default(), seed)
            .expect("route should be found");
        assert!(
            (route.distance_km() - expected_km).abs() < 1.0,
            "seed {seed}: distance {} differs from {expected_km}",
            route.distance_km()
        );
    }
}

#[rstest]
fn seeded_runs_are_reproducible() {
    let waypoints = scattered_waypoints(12, 2024);
    let config = ColonyConfig::default().with_iterations(25);
    let first = optimize_route_seeded(&waypoints, config, 11).expect("route");
    let second = optimize_route_seeded(&waypoints, config, 11).expect("route");
    assert_eq!(first, second);
}

#[rstest]
fn optimised_route_is_no_longer_than_input_order() {
    let waypoints = scattered_waypoints(10, 77);
    let route = optimize_route_seeded(&waypoints, ColonyConfig::default(), 5).expect("route");
    assert!(route.distance_km() <= route_length_km(&waypoints) + 1e-9);
}

#[rstest]
fn full_evaporation_still_returns_a_route() {
    let waypoints = scattered_waypoints(6, 3);
    let config = ColonyConfig::default()
        .with_iterations(10)
        .with_evaporation_rate(1.0);
    let route = optimize_route_seeded(&waypoints, config, 4).expect("first iteration completes");
    assert_eq!(route.waypoints().len(), 6);
}

#[rstest]
#[case::near_coincident(
    vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1e-5), Waypoint::new(0.0, 2e-5)],
    120.0
)]
#[case::half_the_globe(
    vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 90.0), Waypoint::new(0.0, 179.0)],
    90.0
)]
fn extreme_heuristic_exponents_still_complete_routes(
    #[case] waypoints: Vec<Waypoint>,
    #[case] beta: f64,
) {
    let config = ColonyConfig::default()
        .with_iterations(3)
        .with_ants(2)
        .with_beta(beta);
    let route =
        optimize_route_seeded(&waypoints, config, 1).expect("every leg has a positive weight");
    assert_eq!(route.waypoints().len(), 3);
    assert_eq!(route.start(), waypoints.first().copied());
    assert!(route.distance_km().is_finite());
}

#[rstest]
#[case::single_ant(ColonyConfig::default().with_iterations(1).with_ants(1))]
#[case::defaults(ColonyConfig::default())]
fn equator_pair_keeps_its_order(#[case] config: ColonyConfig) {
    let waypoints = equator_pair();
    let route = optimize_route_seeded(&waypoints, config, 21).expect("route");
    assert_eq!(route.waypoints(), waypoints.as_slice());
    assert!((route.distance_km() - 111.2).abs() < 1.0);
}
