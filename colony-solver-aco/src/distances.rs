//! Pairwise great-circle distances between waypoints.

use colony_core::{Waypoint, haversine_km};

/// Dense symmetric distance table, stored row-major.
#[derive(Debug, Clone)]
pub(crate) struct DistanceTable {
    size: usize,
    values: Vec<f64>,
}

impl DistanceTable {
    pub(crate) fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let size = waypoints.len();
        let values = waypoints
            .iter()
            .flat_map(|from| waypoints.iter().map(move |to| haversine_km(*from, *to)))
            .collect();
        Self { size, values }
    }

    pub(crate) const fn len(&self) -> usize {
        self.size
    }

    /// Distance in kilometres, or `None` when either index is out of range.
    pub(crate) fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.values.get(from * self.size + to).copied()
    }

    /// Sum of consecutive legs along `tour`.
    #[expect(clippy::float_arithmetic, reason = "sums leg distances")]
    pub(crate) fn tour_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2)
            .filter_map(|leg| match leg {
                [from, to] => self.get(*from, *to),
                _ => None,
            })
            .fold(0.0, |total, leg| total + leg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn triangle() -> DistanceTable {
        DistanceTable::from_waypoints(&[
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(1.0, 1.0),
        ])
    }

    #[rstest]
    fn table_is_symmetric_with_zero_diagonal() {
        let table = triangle();
        assert_eq!(table.len(), 3);
        for from in 0..3 {
            assert_eq!(table.get(from, from), Some(0.0));
            for to in 0..3 {
                assert_eq!(table.get(from, to), table.get(to, from));
            }
        }
    }

    #[rstest]
    fn out_of_range_lookups_return_none() {
        let table = triangle();
        assert_eq!(table.get(3, 0), None);
        assert_eq!(table.get(0, 3), None);
    }

    #[rstest]
    fn tour_length_sums_open_legs() {
        let table = triangle();
        let expected = table.get(0, 1).expect("leg") + table.get(1, 2).expect("leg");
        assert!((table.tour_length(&[0, 1, 2]) - expected).abs() < 1e-9);
        assert!(table.tour_length(&[0]).abs() < f64::EPSILON);
    }
}
