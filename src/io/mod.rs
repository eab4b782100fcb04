//! File boundary: cities and distance tables in, JSON results out.
//!
//! - [`read_locations`] / [`load_locations`] — `city,lat,lon` tables
//! - [`read_distance_matrix`] / [`write_distance_matrix`] — labelled matrix tables
//! - [`ResultReporter`] — `{ "route", "total_distance" }` records

mod error;
mod locations_csv;
mod matrix_csv;
mod report;

pub use error::{ReadError, ReportError};
pub use locations_csv::{load_locations, read_locations};
pub use matrix_csv::{load_distance_matrix, read_distance_matrix, save_distance_matrix, write_distance_matrix};
pub use report::{load_record, read_record, ResultReporter};
