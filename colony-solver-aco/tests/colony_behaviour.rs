//! Behavioural tests for `ColonyOptimiser`.

use colony_core::{OptimiseError, OptimiseRequest, OptimiseResponse, RouteOptimiser, Waypoint};
use colony_solver_aco::test_support::{equator_pair, unit_square};
use colony_solver_aco::{ColonyConfig, ColonyOptimiser};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct World {
    waypoints: RefCell<Vec<Waypoint>>,
    config: Cell<ColonyConfig>,
    result: RefCell<Option<Result<OptimiseResponse, OptimiseError>>>,
}

impl World {
    fn response(&self) -> OptimiseResponse {
        self.result
            .borrow()
            .clone()
            .expect("optimiser ran")
            .expect("optimisation succeeded")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("two waypoints one degree apart on the equator")]
fn given_pair(#[from(world)] world: &World) {
    *world.waypoints.borrow_mut() = equator_pair();
}

#[given("the corners of a one degree square")]
fn given_square(#[from(world)] world: &World) {
    *world.waypoints.borrow_mut() = unit_square();
}

#[given("a single waypoint")]
fn given_single(#[from(world)] world: &World) {
    *world.waypoints.borrow_mut() = vec![Waypoint::new(10.0, 10.0)];
}

#[given("a colony with no ants")]
fn given_no_ants(#[from(world)] world: &World) {
    world.config.set(world.config.get().with_ants(0));
}

#[when("I optimise the route with seed 7")]
fn optimise(#[from(world)] world: &World) {
    let optimiser = ColonyOptimiser::new(world.config.get());
    let request = OptimiseRequest {
        waypoints: world.waypoints.borrow().clone(),
        seed: Some(7),
    };
    *world.result.borrow_mut() = Some(optimiser.optimise(&request));
}

#[then("the route distance is about 111.2 kilometres")]
fn then_degree(#[from(world)] world: &World) {
    let distance = world.response().route.distance_km();
    assert!((distance - 111.2).abs() < 1.0, "distance was {distance}");
}

#[then("the route walks three edges of the square")]
fn then_three_edges(#[from(world)] world: &World) {
    let distance = world.response().route.distance_km();
    assert!((distance - 333.6).abs() < 1.0, "distance was {distance}");
}

#[then("the route starts at the first waypoint")]
fn then_starts_first(#[from(world)] world: &World) {
    let expected = world.waypoints.borrow().first().copied();
    assert_eq!(world.response().route.start(), expected);
}

#[then("the configuration is rejected")]
fn then_rejected(#[from(world)] world: &World) {
    let result = world.result.borrow();
    assert!(matches!(
        result.as_ref(),
        Some(Err(OptimiseError::InvalidConfiguration(_)))
    ));
}

#[then("too few waypoints are reported")]
fn then_too_few(#[from(world)] world: &World) {
    let result = world.result.borrow();
    assert!(matches!(
        result.as_ref(),
        Some(Err(OptimiseError::InsufficientWaypoints { found: 1 }))
    ));
}

#[scenario(path = "tests/features/colony_optimiser.feature", index = 0)]
fn equator_pair_scenario(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/colony_optimiser.feature", index = 1)]
fn square_scenario(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/colony_optimiser.feature", index = 2)]
fn no_ants_scenario(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/colony_optimiser.feature", index = 3)]
fn single_waypoint_scenario(world: World) {
    let _ = world;
}
