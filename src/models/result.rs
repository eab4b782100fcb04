//! Solve output types.

use serde::{Deserialize, Serialize};

use super::Tour;

/// The outcome of a successful solve: the tour as labels plus its length.
///
/// `route` has `N + 1` labels with the start label at both ends.
/// `total_distance` is in the matrix's original unit, rounded to two
/// decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    tour: Tour,
    route: Vec<String>,
    total_distance: f64,
}

impl RouteResult {
    pub(crate) fn new(tour: Tour, route: Vec<String>, total_distance: f64) -> Self {
        debug_assert_eq!(tour.len(), route.len());
        Self {
            tour,
            route,
            total_distance,
        }
    }

    /// The tour as matrix indices.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// The tour as location labels.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Total travel distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Converts into the persistable record.
    pub fn to_record(&self) -> RouteRecord {
        RouteRecord {
            route: self.route.clone(),
            total_distance: self.total_distance,
        }
    }
}

/// Persistable form of a [`RouteResult`].
///
/// Serializes as `{ "route": [...], "total_distance": 18.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Location labels in visiting order, start label first and last.
    pub route: Vec<String>,
    /// Total travel distance.
    pub total_distance: f64,
}

impl From<&RouteResult> for RouteRecord {
    fn from(result: &RouteResult) -> Self {
        result.to_record()
    }
}
