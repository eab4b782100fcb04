//! Closed tour over matrix indices.

use crate::distance::DistanceMatrix;

/// A closed walk that leaves `start`, visits every other location exactly
/// once, and returns to `start`.
///
/// Stored as `N + 1` indices where the first and last element are the start.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0]).unwrap();
/// assert_eq!(tour.start(), 0);
/// assert_eq!(tour.visits(), &[2, 1]);
/// assert!(tour.is_valid_for(3));
/// assert!(!tour.is_valid_for(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Wraps a closed index sequence.
    ///
    /// Returns `None` if the sequence has fewer than 3 elements or does not
    /// end where it starts. Use [`Tour::is_valid_for`] to check the
    /// permutation invariant against a matrix size.
    pub fn new(stops: Vec<usize>) -> Option<Self> {
        if stops.len() < 3 || stops.first() != stops.last() {
            return None;
        }
        Some(Self { stops })
    }

    /// Builds a tour from the visiting order of the non-start locations.
    pub(crate) fn closed(start: usize, visits: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(visits.len() + 2);
        stops.push(start);
        stops.extend_from_slice(visits);
        stops.push(start);
        Self { stops }
    }

    /// The start (and end) index.
    pub fn start(&self) -> usize {
        self.stops[0]
    }

    /// All `N + 1` indices in order.
    pub fn indices(&self) -> &[usize] {
        &self.stops
    }

    /// The interior positions `1..N`, i.e. every non-start location.
    pub fn visits(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of indices, which is `N + 1`.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; a tour holds at least three indices.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterates over consecutive `(from, to)` arcs, including the closing arc.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if this tour visits each of `size` locations exactly
    /// once and starts and ends at the same in-range index.
    pub fn is_valid_for(&self, size: usize) -> bool {
        if self.stops.len() != size + 1 || self.start() >= size {
            return false;
        }
        let mut seen = vec![false; size];
        seen[self.start()] = true;
        for &i in self.visits() {
            if i >= size || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Sum of arc distances in the matrix's own unit.
    ///
    /// Infinite if any arc is disallowed.
    pub fn distance(&self, matrix: &DistanceMatrix) -> f64 {
        self.arcs().map(|(i, j)| matrix.distance(i, j)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_open_walk() {
        assert!(Tour::new(vec![0, 1, 2]).is_none());
        assert!(Tour::new(vec![0, 0]).is_none());
        assert!(Tour::new(vec![]).is_none());
    }

    #[test]
    fn test_closed() {
        let t = Tour::closed(2, &[0, 1]);
        assert_eq!(t.indices(), &[2, 0, 1, 2]);
        assert_eq!(t.len(), 4);
        assert!(t.is_valid_for(3));
    }

    #[test]
    fn test_duplicate_visit_is_invalid() {
        let t = Tour::new(vec![0, 1, 1, 0]).unwrap();
        assert!(!t.is_valid_for(3));
    }

    #[test]
    fn test_start_revisited_is_invalid() {
        let t = Tour::new(vec![0, 0, 1, 0]).unwrap();
        assert!(!t.is_valid_for(3));
    }

    #[test]
    fn test_arcs() {
        let t = Tour::closed(0, &[1, 2]);
        let arcs: Vec<_> = t.arcs().collect();
        assert_eq!(arcs, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_distance() {
        let dm = DistanceMatrix::new(
            vec![
                vec![0.0, 1.0, 4.0],
                vec![1.0, 0.0, 2.0],
                vec![4.0, 2.0, 0.0],
            ],
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap();
        let t = Tour::closed(0, &[1, 2]);
        assert!((t.distance(&dm) - 7.0).abs() < 1e-10);
    }
}
