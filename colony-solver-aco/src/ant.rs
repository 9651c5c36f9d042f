//! Route construction by a single ant.
//!
//! An ant starts at waypoint 0 and repeatedly moves to an unvisited waypoint
//! chosen with probability proportional to its transition weight. Selection
//! uses one uniform draw against the cumulative distribution of weights.

use rand::Rng;

use crate::distances::DistanceTable;
use crate::pheromone::PheromoneMatrix;

/// Read-only view of the colony state shared by every ant in an iteration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Trails<'a> {
    pub(crate) distances: &'a DistanceTable,
    pub(crate) pheromone: &'a PheromoneMatrix,
    pub(crate) alpha: f64,
    pub(crate) beta: f64,
}

/// Outcome of one ant's walk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Construction {
    /// Every waypoint was visited exactly once.
    Complete { tour: Vec<usize>, length: f64 },
    /// No unvisited waypoint carried a usable weight.
    Stalled { visited: usize },
}

/// Natural logarithm of the attractiveness of moving along a leg.
///
/// The weight is `pheromone^alpha * heuristic^beta` with a heuristic of
/// `1 / distance`, or 1 for coincident waypoints. Returns `None` when the
/// weight is zero or not finite.
#[expect(clippy::float_arithmetic, reason = "ACO transition weight")]
pub(crate) fn log_transition_weight(
    pheromone: f64,
    distance_km: f64,
    alpha: f64,
    beta: f64,
) -> Option<f64> {
    let pheromone_term = if pheromone > 0.0 {
        alpha * pheromone.ln()
    } else if alpha == 0.0 {
        0.0
    } else {
        return None;
    };
    let heuristic_term = if distance_km > 0.0 {
        -beta * distance_km.ln()
    } else {
        0.0
    };
    let log_weight = pheromone_term + heuristic_term;
    log_weight.is_finite().then_some(log_weight)
}

/// Convert log weights into weights relative to the largest one.
///
/// The largest weight becomes 1, so a non-empty set always has a positive,
/// finite total.
#[expect(clippy::float_arithmetic, reason = "rescaling log weights")]
pub(crate) fn rescale(candidates: &mut [(usize, f64)]) {
    let max = candidates
        .iter()
        .map(|(_, log_weight)| *log_weight)
        .fold(f64::NEG_INFINITY, f64::max);
    for (_, weight) in candidates.iter_mut() {
        *weight = (*weight - max).exp();
    }
}

/// Pick a candidate index given `draw` in `[0, 1)`.
///
/// Returns `None` when the weights do not sum to a positive finite total.
#[expect(clippy::float_arithmetic, reason = "cumulative distribution sampling")]
pub(crate) fn select_next(candidates: &[(usize, f64)], draw: f64) -> Option<usize> {
    let total: f64 = candidates.iter().map(|(_, weight)| weight).sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    let target = draw * total;
    let mut cumulative = 0.0;
    for (index, weight) in candidates {
        cumulative += weight;
        if target < cumulative {
            return Some(*index);
        }
    }
    // Rounding can leave the target fractionally above the final sum.
    candidates.last().map(|(index, _)| *index)
}

/// Walk one ant from waypoint 0 until every waypoint is visited or it stalls.
pub(crate) fn construct<R: Rng>(trails: Trails<'_>, rng: &mut R) -> Construction {
    let size = trails.distances.len();
    let mut visited = vec![false; size];
    let mut tour = Vec::with_capacity(size);
    if let Some(start) = visited.first_mut() {
        *start = true;
        tour.push(0);
    }

    let mut candidates = Vec::with_capacity(size);
    while tour.len() < size {
        let Some(&current) = tour.last() else {
            break;
        };
        candidates.clear();
        candidates.extend(
            visited
                .iter()
                .enumerate()
                .filter(|(_, seen)| !**seen)
                .filter_map(|(next, _)| {
                    let distance = trails.distances.get(current, next)?;
                    log_transition_weight(
                        trails.pheromone.get(current, next),
                        distance,
                        trails.alpha,
                        trails.beta,
                    )
                    .map(|log_weight| (next, log_weight))
                }),
        );
        rescale(&mut candidates);

        let draw = rng.gen_range(0.0..1.0);
        let Some(next) = select_next(&candidates, draw) else {
            return Construction::Stalled {
                visited: tour.len(),
            };
        };
        if let Some(seen) = visited.get_mut(next) {
            *seen = true;
        }
        tour.push(next);
    }

    let length = trails.distances.tour_length(&tour);
    Construction::Complete { tour, length }
}
