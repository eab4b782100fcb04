//! Cities tables: `city,lat,lon`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::info;

use super::ReadError;
use crate::models::Location;

/// Parses a cities table with a `city,lat,lon` header.
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<Location>, ReadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let locations = reader.deserialize().collect::<Result<Vec<Location>, _>>()?;
    Ok(locations)
}

/// Reads a cities table from `path`.
pub fn load_locations(path: impl AsRef<Path>) -> Result<Vec<Location>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let locations = read_locations(file)?;
    info!(path = %path.display(), count = locations.len(), "loaded locations");
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_locations() {
        let table = "city,lat,lon\nChicago,41.8781,-87.6298\nPeoria, 40.6936 ,-89.5889\n";
        let locations = read_locations(table.as_bytes()).expect("valid");
        assert_eq!(
            locations,
            vec![
                Location::new("Chicago", 41.8781, -87.6298),
                Location::new("Peoria", 40.6936, -89.5889),
            ]
        );
    }

    #[test]
    fn test_bad_coordinate() {
        let table = "city,lat,lon\nChicago,north,-87.6\n";
        assert!(matches!(read_locations(table.as_bytes()), Err(ReadError::Csv(_))));
    }

    #[test]
    fn test_empty_table() {
        assert!(read_locations("city,lat,lon\n".as_bytes()).expect("valid").is_empty());
    }
}
