//! Constructive heuristics for building an initial tour.
//!
//! - [`cheapest_arc`] — Greedy path-cheapest-arc (nearest unvisited) tour, O(n²)

mod cheapest_arc;

pub use cheapest_arc::cheapest_arc;
pub(crate) use cheapest_arc::construct;
