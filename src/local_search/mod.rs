//! Local search operators for improving a constructed tour.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal with a fixed start

mod two_opt;

pub(crate) use two_opt::improve;
pub use two_opt::two_opt_improve;
