//! Single-vehicle route optimizer.

use std::sync::Arc;

use super::{CancelToken, Halt, Improvement, SolveError, SolveObserver, SolverConfig, TracingObserver};
use crate::constructive::construct;
use crate::distance::{DistanceMatrix, ScaledMatrix};
use crate::local_search::improve;
use crate::models::{RouteResult, Tour};

/// Computes a closed tour through every location of a [`DistanceMatrix`].
///
/// Distances are converted to fixed-point integers (see
/// [`SolverConfig::scale`]), a tour is built with the cheapest-arc
/// heuristic, optionally refined with 2-opt, and the total is converted back
/// and rounded to two decimal places.
///
/// The optimizer holds no mutable state; one instance may serve concurrent
/// solves.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::solver::RouteOptimizer;
///
/// let dm = DistanceMatrix::new(
///     vec![
///         vec![0.0, 2.0, 9.0, 10.0],
///         vec![2.0, 0.0, 6.0, 4.0],
///         vec![9.0, 6.0, 0.0, 3.0],
///         vec![10.0, 4.0, 3.0, 0.0],
///     ],
///     vec!["A".into(), "B".into(), "C".into(), "D".into()],
/// )
/// .unwrap();
///
/// let result = RouteOptimizer::default().solve(&dm, 0).unwrap().unwrap();
/// assert_eq!(result.route(), &["A", "B", "D", "C", "A"]);
/// assert_eq!(result.total_distance(), 18.0);
/// ```
#[derive(Clone)]
pub struct RouteOptimizer {
    config: SolverConfig,
    observer: Arc<dyn SolveObserver>,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl std::fmt::Debug for RouteOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteOptimizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RouteOptimizer {
    /// Creates an optimizer that reports outcomes through [`TracingObserver`].
    ///
    /// A zero scale is treated as [`DEFAULT_SCALE`](super::DEFAULT_SCALE);
    /// use [`SolverConfig::validate`] to reject it up front.
    pub fn new(mut config: SolverConfig) -> Self {
        if config.validate().is_err() {
            config.scale = super::DEFAULT_SCALE;
        }
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer notified after each solve.
    pub fn with_observer(mut self, observer: Arc<dyn SolveObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves from `start`.
    ///
    /// Returns `Ok(None)` when no tour can be completed, for example when a
    /// location cannot be entered from anywhere.
    ///
    /// # Errors
    ///
    /// [`SolveError::StartOutOfRange`] if `start >= matrix.size()`.
    pub fn solve(&self, matrix: &DistanceMatrix, start: usize) -> Result<Option<RouteResult>, SolveError> {
        self.run(matrix, start, None)
    }

    /// Like [`RouteOptimizer::solve`], stopping early once `cancel` is set.
    ///
    /// # Errors
    ///
    /// [`SolveError::StartOutOfRange`], or [`SolveError::Cancelled`] if the
    /// token was set before the search finished.
    pub fn solve_cancellable(
        &self,
        matrix: &DistanceMatrix,
        start: usize,
        cancel: &CancelToken,
    ) -> Result<Option<RouteResult>, SolveError> {
        self.run(matrix, start, Some(cancel))
    }

    fn run(
        &self,
        matrix: &DistanceMatrix,
        start: usize,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<RouteResult>, SolveError> {
        let size = matrix.size();
        if start >= size {
            return Err(SolveError::StartOutOfRange { start, size });
        }

        let costs = ScaledMatrix::new(matrix, self.config.scale);
        match self.search(&costs, start, cancel) {
            Ok((tour, total)) => {
                let route = tour.indices().iter().map(|&i| matrix.label(i).to_string()).collect();
                let result = RouteResult::new(tour, route, costs.unscale(total));
                self.observer.on_solved(&result);
                Ok(Some(result))
            }
            Err(Halt::NoSolution(reason)) => {
                self.observer.on_no_solution(&reason);
                Ok(None)
            }
            Err(Halt::Cancelled) => Err(SolveError::Cancelled),
        }
    }

    fn search(
        &self,
        costs: &ScaledMatrix,
        start: usize,
        cancel: Option<&CancelToken>,
    ) -> Result<(Tour, i64), Halt> {
        let (tour, total) = construct(costs, start, cancel)?;
        match self.config.improvement {
            Improvement::None => Ok((tour, total)),
            Improvement::TwoOpt => {
                let tour = improve(costs, tour, cancel)?;
                // 2-opt only accepts strictly cheaper tours, so the sum cannot
                // exceed the constructed total
                let total = costs.path_cost(tour.indices()).unwrap_or(total);
                Ok((tour, total))
            }
        }
    }
}
