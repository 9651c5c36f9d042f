//! Pheromone trail storage.

/// Square matrix of pheromone levels between waypoint indices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PheromoneMatrix {
    size: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Level every trail starts at.
    pub(crate) const INITIAL_LEVEL: f64 = 1.0;

    pub(crate) fn uniform(size: usize, level: f64) -> Self {
        Self {
            size,
            values: vec![level; size * size],
        }
    }

    pub(crate) fn new(size: usize) -> Self {
        Self::uniform(size, Self::INITIAL_LEVEL)
    }

    /// Pheromone on the leg `from -> to`; zero outside the matrix.
    pub(crate) fn get(&self, from: usize, to: usize) -> f64 {
        self.offset(from, to)
            .and_then(|offset| self.values.get(offset))
            .copied()
            .unwrap_or(0.0)
    }

    /// Multiply every level by `1 - rate`.
    #[expect(clippy::float_arithmetic, reason = "pheromone decay is multiplicative")]
    pub(crate) fn evaporate(&mut self, rate: f64) {
        let retained = 1.0 - rate;
        for level in &mut self.values {
            *level *= retained;
        }
    }

    /// Add `1 / length` to every leg of `tour`.
    ///
    /// Tours with zero length deposit nothing so that levels stay finite.
    #[expect(clippy::float_arithmetic, reason = "deposit is inverse tour length")]
    pub(crate) fn deposit(&mut self, tour: &[usize], length: f64) {
        if length <= 0.0 || !length.is_finite() {
            return;
        }
        let amount = length.recip();
        for leg in tour.windows(2) {
            if let [from, to] = leg
                && let Some(offset) = self.offset(*from, *to)
                && let Some(level) = self.values.get_mut(offset)
            {
                *level += amount;
            }
        }
    }

    fn offset(&self, from: usize, to: usize) -> Option<usize> {
        (from < self.size && to < self.size).then(|| from * self.size + to)
    }
}
