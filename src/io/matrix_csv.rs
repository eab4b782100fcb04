//! Distance matrix tables.
//!
//! Layout: a header row whose first cell is the (usually empty) index column
//! name followed by the column labels, then one row per location starting
//! with its label. An empty cell marks a disallowed arc.
//!
//! ```text
//! ,A,B,C
//! A,0,2.5,9
//! B,2.5,0,
//! C,9,6,0
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, info};

use super::{ReadError, ReportError};
use crate::distance::DistanceMatrix;

/// Parses a distance matrix table. Row labels become location labels.
///
/// The header's column labels must list the row labels in the same order.
pub fn read_distance_matrix<R: Read>(reader: R) -> Result<DistanceMatrix, ReadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();

    let mut labels = Vec::new();
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let mut cells = record.iter();
        labels.push(cells.next().unwrap_or_default().to_string());

        let row = cells
            .enumerate()
            .map(|(col, cell)| parse_cell(cell, idx + 1, col + 1))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    check_header(&columns, &labels)?;
    debug!(rows = rows.len(), "parsed distance table");
    Ok(DistanceMatrix::with_arcs(rows, labels)?)
}

fn check_header(columns: &[String], labels: &[String]) -> Result<(), ReadError> {
    if columns.len() != labels.len() {
        return Err(ReadError::HeaderLength {
            columns: columns.len(),
            rows: labels.len(),
        });
    }
    match columns.iter().zip(labels).position(|(c, l)| c != l) {
        Some(idx) => Err(ReadError::HeaderMismatch {
            column: idx + 1,
            header: columns[idx].clone(),
            row: labels[idx].clone(),
        }),
        None => Ok(()),
    }
}

/// Reads a distance matrix table from `path`.
pub fn load_distance_matrix(path: impl AsRef<Path>) -> Result<DistanceMatrix, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let matrix = read_distance_matrix(file)?;
    info!(path = %path.display(), size = matrix.size(), "distance matrix loaded");
    Ok(matrix)
}

/// Writes `matrix` in the table layout read by [`read_distance_matrix`].
pub fn write_distance_matrix<W: Write>(matrix: &DistanceMatrix, writer: W) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    let header = std::iter::once("").chain(matrix.labels().iter().map(String::as_str));
    writer.write_record(header)?;

    for i in 0..matrix.size() {
        let mut record = Vec::with_capacity(matrix.size() + 1);
        record.push(matrix.label(i).to_string());
        for j in 0..matrix.size() {
            record.push(matrix.arc(i, j).map(|d| d.to_string()).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `matrix` to `path`, replacing any existing file.
pub fn save_distance_matrix(matrix: &DistanceMatrix, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_distance_matrix(matrix, file).map_err(|err| match err {
        ReportError::Write(source) => ReportError::Io {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;
    info!(path = %path.display(), "distance matrix saved");
    Ok(())
}

fn parse_cell(cell: &str, row: usize, column: usize) -> Result<Option<f64>, ReadError> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| ReadError::Parse {
        row,
        column,
        value: cell.to_string(),
    })
}
