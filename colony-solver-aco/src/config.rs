//! Tuning parameters for the colony.

use colony_core::ConfigurationError;

/// Configuration for [`ColonyOptimiser`](crate::ColonyOptimiser).
///
/// # Examples
/// ```
/// use colony_solver_aco::ColonyConfig;
///
/// let config = ColonyConfig::default().with_iterations(10).with_ants(5);
/// assert!(config.validate().is_ok());
/// assert!(ColonyConfig::default().with_ants(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColonyConfig {
    /// Number of iterations to run. Every iteration is executed.
    pub iterations: usize,
    /// Ants released per iteration.
    pub ants: usize,
    /// Fraction of pheromone removed after each iteration, within `[0, 1]`.
    pub evaporation_rate: f64,
    /// Exponent applied to pheromone levels.
    pub alpha: f64,
    /// Exponent applied to the inverse-distance heuristic.
    pub beta: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            ants: 20,
            evaporation_rate: 0.5,
            alpha: 1.0,
            beta: 2.0,
        }
    }
}

impl ColonyConfig {
    /// Set the iteration count.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of ants per iteration.
    #[must_use]
    pub const fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Set the evaporation rate.
    #[must_use]
    pub const fn with_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Set the pheromone exponent.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the heuristic exponent.
    #[must_use]
    pub const fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Check every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.iterations == 0 {
            return Err(ConfigurationError::ZeroIterations);
        }
        if self.ants == 0 {
            return Err(ConfigurationError::ZeroAnts);
        }
        // NaN fails the range check.
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(ConfigurationError::EvaporationRateOutOfRange(
                self.evaporation_rate,
            ));
        }
        if !self.alpha.is_finite() {
            return Err(ConfigurationError::NonFiniteExponent { name: "alpha" });
        }
        if !self.beta.is_finite() {
            return Err(ConfigurationError::NonFiniteExponent { name: "beta" });
        }
        Ok(())
    }
}
