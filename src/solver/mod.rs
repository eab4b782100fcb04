//! Route optimizer and its supporting types.
//!
//! - [`RouteOptimizer`] — fixed-point cheapest-arc construction with optional 2-opt
//! - [`SolverConfig`] — scale factor and refinement settings
//! - [`SolveObserver`] — outcome notifications ([`TracingObserver`], [`SilentObserver`])
//! - [`CancelToken`] — cooperative cancellation between outer iterations

pub(crate) mod cancel;
mod config;
mod observer;
mod optimizer;
mod outcome;

pub use cancel::CancelToken;
pub use config::{ConfigError, Improvement, SolverConfig, DEFAULT_SCALE};
pub use observer::{SilentObserver, SolveObserver, TracingObserver};
pub use optimizer::RouteOptimizer;
pub(crate) use outcome::Halt;
pub use outcome::{NoSolution, SolveError};
