//! Why a solve stopped without a tour.

use thiserror::Error;

/// Reasons the construction could not complete a tour.
///
/// This is an expected outcome, reported as `Ok(None)` from
/// [`RouteOptimizer::solve`](super::RouteOptimizer::solve) and handed to the
/// observer. It is never returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSolution {
    /// No allowed arc leads from the open end to any unvisited location.
    Unreachable {
        /// Index of the open end.
        from: usize,
        /// Locations placed so far, start included.
        placed: usize,
    },
    /// Every location was placed but the arc back to the start is disallowed.
    ClosingArcDisallowed {
        /// Index of the last placed location.
        from: usize,
    },
    /// The scaled tour cost does not fit in 64 bits.
    CostOverflow,
}

impl std::fmt::Display for NoSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable { from, placed } => write!(
                f,
                "no allowed arc from location {from} after placing {placed} locations"
            ),
            Self::ClosingArcDisallowed { from } => {
                write!(f, "arc from location {from} back to the start is disallowed")
            }
            Self::CostOverflow => write!(f, "tour cost overflows the fixed-point range"),
        }
    }
}

/// Errors from [`RouteOptimizer::solve`](super::RouteOptimizer::solve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The start index is not a location of the matrix.
    #[error("start index {start} is out of range for {size} locations")]
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// The cancel token was triggered before the search finished.
    #[error("solve was cancelled")]
    Cancelled,
}

/// Internal early exit shared by the construction and improvement passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Halt {
    NoSolution(NoSolution),
    Cancelled,
}

impl From<NoSolution> for Halt {
    fn from(reason: NoSolution) -> Self {
        Halt::NoSolution(reason)
    }
}
