//! Fixed-point view of a distance matrix.

use super::DistanceMatrix;

/// Integer arc costs obtained by multiplying each distance by `scale` and
/// rounding to the nearest integer. Disallowed arcs are `None`.
///
/// Summing integers keeps tour totals identical across platforms regardless
/// of the order in which arcs are added.
#[derive(Debug, Clone)]
pub(crate) struct ScaledMatrix {
    costs: Vec<Option<i64>>,
    size: usize,
    scale: u32,
}

impl ScaledMatrix {
    pub(crate) fn new(matrix: &DistanceMatrix, scale: u32) -> Self {
        let size = matrix.size();
        let factor = f64::from(scale);
        let mut costs = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                // `as` saturates, so huge distances clamp to i64::MAX and are
                // caught by the checked sums downstream.
                costs.push(matrix.arc(i, j).map(|d| (d * factor).round() as i64));
            }
        }
        Self { costs, size, scale }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Scaled cost of the arc, or `None` if it is disallowed.
    pub(crate) fn cost(&self, from: usize, to: usize) -> Option<i64> {
        self.costs[from * self.size + to]
    }

    /// Cheapest allowed arc from `from` to a location not marked in
    /// `visited`, as `(index, cost)`. Ties go to the lowest index.
    ///
    /// `visited` must hold one flag per location.
    pub(crate) fn cheapest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, i64)> {
        debug_assert_eq!(visited.len(), self.size);
        let mut best: Option<(usize, i64)> = None;
        for (j, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let Some(c) = self.cost(from, j) else {
                continue;
            };
            // strict `<` keeps the lowest index on ties
            if best.map_or(true, |(_, bc)| c < bc) {
                best = Some((j, c));
            }
        }
        best
    }

    /// Total scaled cost of a closed index sequence.
    ///
    /// `None` if an arc is disallowed or the sum overflows.
    pub(crate) fn path_cost(&self, stops: &[usize]) -> Option<i64> {
        stops
            .windows(2)
            .try_fold(0i64, |acc, w| acc.checked_add(self.cost(w[0], w[1])?))
    }

    /// Converts a scaled total back to the original unit, rounded to two
    /// decimal places.
    pub(crate) fn unscale(&self, total: i64) -> f64 {
        let value = total as f64 / f64::from(self.scale);
        (value * 100.0).round() / 100.0
    }
}
