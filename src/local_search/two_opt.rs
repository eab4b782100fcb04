//! 2-opt improvement of a closed tour.
//!
//! # Algorithm
//!
//! For each pair of interior positions `i < j`, reverse the segment
//! `stops[i..=j]`. The change in cost is
//!
//! ```text
//! delta = c(s[i-1], s[j]) + rev(s[i..=j]) + c(s[i], s[j+1])
//!       - c(s[i-1], s[i]) - fwd(s[i..=j]) - c(s[j], s[j+1])
//! ```
//!
//! where `fwd`/`rev` are the costs of walking the segment forwards and
//! backwards. They cancel on symmetric matrices; on asymmetric ones the
//! reversed segment is re-costed. Moves that would use a disallowed arc are
//! skipped. If delta < 0 the reversal is applied (first-improvement), and
//! passes repeat until none improves.
//!
//! The start stays fixed at both ends.
//!
//! # Complexity
//!
//! O(n³) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::{DistanceMatrix, ScaledMatrix};
use crate::models::Tour;
use crate::solver::{cancel::cancelled, CancelToken, Halt, DEFAULT_SCALE};

/// Applies 2-opt to `tour` and returns the improved tour with its distance
/// in the matrix's unit.
///
/// Costs are compared at the default fixed-point scale. The returned tour is
/// never worse than the input.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::local_search::two_opt_improve;
/// use u_tour::models::Tour;
///
/// // four points on a line: 0 - 1 - 2 - 3
/// let rows = (0..4)
///     .map(|i: i32| (0..4).map(|j: i32| f64::from((i - j).abs())).collect())
///     .collect();
/// let labels = (0..4).map(|i| i.to_string()).collect();
/// let dm = DistanceMatrix::new(rows, labels).unwrap();
///
/// // 0→2→1→3→0 costs 2 + 1 + 2 + 3 = 8; the best tour costs 6
/// let bad = Tour::new(vec![0, 2, 1, 3, 0]).unwrap();
/// let (improved, dist) = two_opt_improve(&bad, &dm);
/// assert!(dist <= 6.0 + 1e-10);
/// assert!(improved.is_valid_for(4));
/// ```
pub fn two_opt_improve(tour: &Tour, matrix: &DistanceMatrix) -> (Tour, f64) {
    let scaled = ScaledMatrix::new(matrix, DEFAULT_SCALE);
    match improve(&scaled, tour.clone(), None) {
        Ok(improved) => {
            let dist = improved.distance(matrix);
            (improved, dist)
        }
        // Only cancellation halts improvement, and no token was given
        Err(_) => (tour.clone(), tour.distance(matrix)),
    }
}

/// Runs first-improvement 2-opt over scaled costs.
///
/// `tour` must use only allowed arcs.
pub(crate) fn improve(
    costs: &ScaledMatrix,
    tour: Tour,
    cancel: Option<&CancelToken>,
) -> Result<Tour, Halt> {
    let start = tour.start();
    let mut stops = tour.indices().to_vec();
    let last = stops.len() - 2;
    if last < 2 {
        return Ok(tour);
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..last {
            if cancelled(cancel) {
                return Err(Halt::Cancelled);
            }
            for j in i + 1..=last {
                if let Some(delta) = reversal_delta(costs, &stops, i, j) {
                    if delta < 0 {
                        stops[i..=j].reverse();
                        improved = true;
                    }
                }
            }
        }
    }

    debug_assert_eq!(stops[0], start);
    Ok(Tour::closed(start, &stops[1..stops.len() - 1]))
}

/// Cost change from reversing `stops[i..=j]`, or `None` if the reversed tour
/// would use a disallowed arc.
fn reversal_delta(costs: &ScaledMatrix, stops: &[usize], i: usize, j: usize) -> Option<i128> {
    let before = stops[i - 1];
    let after = stops[j + 1];

    let mut old = i128::from(costs.cost(before, stops[i])?) + i128::from(costs.cost(stops[j], after)?);
    let mut new = i128::from(costs.cost(before, stops[j])?) + i128::from(costs.cost(stops[i], after)?);
    for k in i..j {
        old += i128::from(costs.cost(stops[k], stops[k + 1])?);
        new += i128::from(costs.cost(stops[k + 1], stops[k])?);
    }

    Some(new - old)
}
