//! Matrix construction errors.

use thiserror::Error;

/// Reasons a table cannot become a [`DistanceMatrix`](super::DistanceMatrix).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The table is not square.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows in the table.
        expected: usize,
    },
    /// The number of labels differs from the number of rows.
    #[error("{labels} labels given for a {size}x{size} matrix")]
    LabelCount {
        /// Number of labels.
        labels: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// Fewer than two locations.
    #[error("a tour needs at least 2 locations, got {size}")]
    TooSmall {
        /// Matrix dimension.
        size: usize,
    },
    /// An entry is negative or not finite.
    #[error("invalid distance {value} at ({from}, {to})")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The rejected value.
        value: f64,
    },
    /// A diagonal entry is non-zero or disallowed.
    #[error("self-distance of location {index} must be 0")]
    NonZeroDiagonal {
        /// Location index.
        index: usize,
    },
}

impl MatrixError {
    /// `true` for malformed dimensions or label/count mismatch.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::NotSquare { .. } | Self::LabelCount { .. })
    }

    /// `true` for bad entries or a degenerate (N < 2) matrix.
    pub fn is_invalid_value(&self) -> bool {
        !self.is_shape_error()
    }
}
