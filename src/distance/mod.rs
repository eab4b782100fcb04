//! Distance matrices.
//!
//! Provides the validated, labelled distance matrix consumed by the
//! optimizer, and the fixed-point view the optimizer searches over.

mod error;
mod matrix;
mod scaled;

pub use error::MatrixError;
pub use matrix::DistanceMatrix;
pub(crate) use scaled::ScaledMatrix;
