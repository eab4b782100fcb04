//! Path-cheapest-arc constructive heuristic.
//!
//! Builds a single closed tour greedily: starting from the start location,
//! always extend the open end with the cheapest allowed arc to an unvisited
//! location, then return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! Equivalent to the nearest-neighbor tour. Solution quality is typically
//! 15-25% above optimal; deterministic and fast, it serves as the baseline
//! tour for optional local search.

use crate::distance::{DistanceMatrix, ScaledMatrix};
use crate::models::Tour;
use crate::solver::{cancel::cancelled, CancelToken, Halt, NoSolution, DEFAULT_SCALE};

/// Constructs a closed tour from `start` using the cheapest-arc rule.
///
/// Costs are compared at the default fixed-point scale; ties go to the
/// lowest index. Returns `None` if the greedy walk reaches a location with
/// no allowed arc onward, or cannot return to `start`.
///
/// # Panics
///
/// Panics if `start` is out of range.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::cheapest_arc;
///
/// // four points on a line: 0 - 1 - 2 - 3
/// let rows = (0..4)
///     .map(|i: i32| (0..4).map(|j: i32| f64::from((i - j).abs())).collect())
///     .collect();
/// let labels = (0..4).map(|i| i.to_string()).collect();
/// let dm = DistanceMatrix::new(rows, labels).unwrap();
///
/// let tour = cheapest_arc(&dm, 0).unwrap();
/// assert_eq!(tour.indices(), &[0, 1, 2, 3, 0]);
/// assert!((tour.distance(&dm) - 6.0).abs() < 1e-10);
/// ```
pub fn cheapest_arc(matrix: &DistanceMatrix, start: usize) -> Option<Tour> {
    assert!(start < matrix.size(), "start index out of range");
    let scaled = ScaledMatrix::new(matrix, DEFAULT_SCALE);
    construct(&scaled, start, None).ok().map(|(tour, _)| tour)
}

/// Builds the tour over scaled costs and returns it with its scaled total,
/// closing arc included.
pub(crate) fn construct(
    costs: &ScaledMatrix,
    start: usize,
    cancel: Option<&CancelToken>,
) -> Result<(Tour, i64), Halt> {
    let n = costs.size();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n - 1);
    let mut current = start;
    let mut total: i64 = 0;

    for _ in 1..n {
        if cancelled(cancel) {
            return Err(Halt::Cancelled);
        }

        let (next, c) = costs.cheapest_unvisited(current, &visited).ok_or(NoSolution::Unreachable {
            from: current,
            placed: order.len() + 1,
        })?;
        total = total.checked_add(c).ok_or(NoSolution::CostOverflow)?;
        visited[next] = true;
        order.push(next);
        current = next;
    }

    let closing = costs
        .cost(current, start)
        .ok_or(NoSolution::ClosingArcDisallowed { from: current })?;
    total = total.checked_add(closing).ok_or(NoSolution::CostOverflow)?;

    Ok((Tour::closed(start, &order), total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{i}")).collect()
    }

    /// A,B,C,D with A–B=2, A–C=9, A–D=10, B–C=6, B–D=4, C–D=3.
    fn abcd() -> DistanceMatrix {
        DistanceMatrix::new(
            vec![
                vec![0.0, 2.0, 9.0, 10.0],
                vec![2.0, 0.0, 6.0, 4.0],
                vec![9.0, 6.0, 0.0, 3.0],
                vec![10.0, 4.0, 3.0, 0.0],
            ],
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
        )
        .expect("valid")
    }

    #[test]
    fn test_abcd_greedy_order() {
        let scaled = ScaledMatrix::new(&abcd(), 100);
        let (tour, total) = construct(&scaled, 0, None).expect("solvable");
        assert_eq!(tour.indices(), &[0, 1, 3, 2, 0]);
        assert_eq!(total, 1800);
    }

    #[test]
    fn test_other_start() {
        let scaled = ScaledMatrix::new(&abcd(), 100);
        let (tour, total) = construct(&scaled, 2, None).expect("solvable");
        // C→D (3), D→B (4), B→A (2), A→C (9)
        assert_eq!(tour.indices(), &[2, 3, 1, 0, 2]);
        assert_eq!(total, 1800);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let dm = DistanceMatrix::new(
            vec![
                vec![0.0, 5.0, 5.0, 5.0],
                vec![5.0, 0.0, 5.0, 5.0],
                vec![5.0, 5.0, 0.0, 5.0],
                vec![5.0, 5.0, 5.0, 0.0],
            ],
            labels(4),
        )
        .expect("valid");
        let tour = cheapest_arc(&dm, 0).expect("solvable");
        assert_eq!(tour.indices(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_ties_decided_after_scaling() {
        // 1.001 and 1.004 both scale to 100, so index 1 wins despite being longer
        let dm = DistanceMatrix::new(
            vec![
                vec![0.0, 1.004, 1.001],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
            labels(3),
        )
        .expect("valid");
        assert_eq!(cheapest_arc(&dm, 0).expect("solvable").visits(), &[1, 2]);
    }

    #[test]
    fn test_unreachable_location() {
        // nothing may enter location 2
        let dm = DistanceMatrix::with_arcs(
            vec![
                vec![Some(0.0), Some(1.0), None],
                vec![Some(1.0), Some(0.0), None],
                vec![Some(1.0), Some(1.0), Some(0.0)],
            ],
            labels(3),
        )
        .expect("valid");
        let scaled = ScaledMatrix::new(&dm, 100);
        assert_eq!(
            construct(&scaled, 0, None),
            Err(Halt::NoSolution(NoSolution::Unreachable { from: 1, placed: 2 }))
        );
        assert!(cheapest_arc(&dm, 0).is_none());
    }

    #[test]
    fn test_closing_arc_disallowed() {
        let dm = DistanceMatrix::with_arcs(
            vec![
                vec![Some(0.0), Some(1.0), Some(5.0)],
                vec![Some(1.0), Some(0.0), Some(1.0)],
                vec![None, Some(1.0), Some(0.0)],
            ],
            labels(3),
        )
        .expect("valid");
        let scaled = ScaledMatrix::new(&dm, 100);
        assert_eq!(
            construct(&scaled, 0, None),
            Err(Halt::NoSolution(NoSolution::ClosingArcDisallowed { from: 2 }))
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let scaled = ScaledMatrix::new(&abcd(), 100);
        assert_eq!(construct(&scaled, 0, Some(&token)), Err(Halt::Cancelled));
    }

    #[test]
    fn test_two_locations() {
        let dm = DistanceMatrix::new(vec![vec![0.0, 3.5], vec![1.25, 0.0]], labels(2)).expect("valid");
        let scaled = ScaledMatrix::new(&dm, 100);
        let (tour, total) = construct(&scaled, 1, None).expect("solvable");
        assert_eq!(tour.indices(), &[1, 0, 1]);
        assert_eq!(total, 475);
    }
}
