//! Iteration loop shared by every entry point.

use colony_core::{OptimiseError, Waypoint};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::ColonyConfig;
use crate::ant::{Construction, Trails, construct};
use crate::distances::DistanceTable;
use crate::pheromone::PheromoneMatrix;

/// Shortest tour found by a run, with run statistics.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColonyOutcome {
    pub(crate) tour: Vec<usize>,
    pub(crate) length: f64,
    pub(crate) best_iteration: usize,
    pub(crate) degenerate_constructions: usize,
    pub(crate) best_distance_history: Vec<f64>,
}

#[derive(Debug)]
pub(crate) struct Colony {
    config: ColonyConfig,
    distances: DistanceTable,
    pheromone: PheromoneMatrix,
}

impl Colony {
    pub(crate) fn new(waypoints: &[Waypoint], config: ColonyConfig) -> Self {
        let distances = DistanceTable::from_waypoints(waypoints);
        let pheromone = PheromoneMatrix::new(distances.len());
        Self {
            config,
            distances,
            pheromone,
        }
    }

    #[cfg(test)]
    fn with_pheromone(mut self, pheromone: PheromoneMatrix) -> Self {
        self.pheromone = pheromone;
        self
    }

    /// Run every configured iteration, seeding the master RNG with `seed`.
    ///
    /// The caller validates the configuration and waypoint count.
    pub(crate) fn run(mut self, seed: u64) -> Result<ColonyOutcome, OptimiseError> {
        let ColonyConfig {
            iterations,
            ants,
            evaporation_rate,
            alpha,
            beta,
        } = self.config;
        let mut master = ChaCha8Rng::seed_from_u64(seed);
        let mut best: Option<(Vec<usize>, f64, usize)> = None;
        let mut degenerate_constructions = 0_usize;
        let mut best_distance_history = Vec::with_capacity(iterations);

        log::debug!(
            "starting colony: {} waypoints, {iterations} iterations, {ants} ants, seed {seed}",
            self.distances.len()
        );

        for iteration in 1..=iterations {
            let ant_seeds: Vec<u64> = (0..ants).map(|_| master.next_u64()).collect();
            let trails = Trails {
                distances: &self.distances,
                pheromone: &self.pheromone,
                alpha,
                beta,
            };
            let constructions: Vec<Construction> = ant_seeds
                .par_iter()
                .map(|ant_seed| construct(trails, &mut ChaCha8Rng::seed_from_u64(*ant_seed)))
                .collect();

            self.pheromone.evaporate(evaporation_rate);
            for construction in &constructions {
                match construction {
                    Construction::Complete { tour, length } => {
                        if best
                            .as_ref()
                            .is_none_or(|(_, best_length, _)| length < best_length)
                        {
                            best = Some((tour.clone(), *length, iteration));
                        }
                        self.pheromone.deposit(tour, *length);
                    }
                    Construction::Stalled { visited } => {
                        log::trace!("ant stalled after {visited} waypoints in iteration {iteration}");
                        degenerate_constructions += 1;
                    }
                }
            }

            if let Some((_, length, _)) = &best {
                best_distance_history.push(*length);
                log::trace!("iteration {iteration}: best distance {length:.3} km");
            }
        }

        if degenerate_constructions > 0 {
            log::warn!(
                "{degenerate_constructions} of {} ant constructions stalled",
                iterations.saturating_mul(ants)
            );
        }

        let Some((tour, length, best_iteration)) = best else {
            return Err(OptimiseError::DegenerateConstruction { iterations });
        };
        log::debug!("colony finished: best distance {length:.3} km found in iteration {best_iteration}");
        Ok(ColonyOutcome {
            tour,
            length,
            best_iteration,
            degenerate_constructions,
            best_distance_history,
        })
    }
}

/// Draw a fresh seed for runs without one.
pub(crate) fn entropy_seed() -> u64 {
    rand::random()
}
