//! # u-tour
//!
//! Single-vehicle tour optimization: given a matrix of pairwise travel
//! distances and a start location, find a closed visiting order with a small
//! total distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Tour, RouteResult, RouteRecord)
//! - [`distance`] — Validated, labelled distance matrix
//! - [`constructive`] — Cheapest-arc tour construction
//! - [`local_search`] — 2-opt refinement
//! - [`solver`] — Route optimizer, configuration, observers, cancellation
//! - [`io`] — Cities and matrix tables, JSON result records

pub mod constructive;
pub mod distance;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;
