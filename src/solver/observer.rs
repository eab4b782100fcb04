//! Solve notifications.

use tracing::{info, warn};

use super::NoSolution;
use crate::models::RouteResult;

/// Receives the outcome of each solve.
///
/// Both methods default to doing nothing.
pub trait SolveObserver: Send + Sync {
    /// Called once a tour has been found.
    fn on_solved(&self, _result: &RouteResult) {}

    /// Called when no tour could be constructed.
    fn on_no_solution(&self, _reason: &NoSolution) {}
}

/// Reports outcomes as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn on_solved(&self, result: &RouteResult) {
        info!(
            stops = result.route().len(),
            total_distance = result.total_distance(),
            "optimal route was successfully found"
        );
    }

    fn on_no_solution(&self, reason: &NoSolution) {
        warn!(%reason, "no tour solution found");
    }
}

/// Ignores every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SolveObserver for SilentObserver {}
