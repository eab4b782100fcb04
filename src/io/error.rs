//! Errors at the file boundary.

use thiserror::Error;

use crate::distance::MatrixError;

/// Failure reading a cities table, a distance matrix table, or a saved record.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The CSV structure is malformed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// A cell is neither empty nor a number.
    #[error("row {row}, column {column}: '{value}' is not a distance")]
    Parse {
        /// 1-based data row.
        row: usize,
        /// 1-based column, label column excluded.
        column: usize,
        /// Offending text.
        value: String,
    },
    /// The header lists a different number of columns than there are rows.
    #[error("header names {columns} columns but the table has {rows} rows")]
    HeaderLength {
        /// Column labels in the header, index column excluded.
        columns: usize,
        /// Data rows.
        rows: usize,
    },
    /// A header column label differs from the label of the matching row.
    #[error("header column {column} is '{header}' but row {column} is '{row}'")]
    HeaderMismatch {
        /// 1-based column, label column excluded.
        column: usize,
        /// Label in the header.
        header: String,
        /// Label at the start of the row.
        row: String,
    },
    /// The table parsed but is not a valid distance matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// A saved result record is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failure persisting a result or a matrix.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The target could not be written.
    #[error("cannot write '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The underlying writer failed.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
    /// JSON encoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// CSV encoding failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
