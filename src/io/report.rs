//! JSON result records.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use super::{ReadError, ReportError};
use crate::models::{RouteRecord, RouteResult};

/// Serializes solve results as `{ "route": [...], "total_distance": n }`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::io::ResultReporter;
/// use u_tour::solver::RouteOptimizer;
///
/// let dm = DistanceMatrix::new(
///     vec![vec![0.0, 1.5], vec![1.5, 0.0]],
///     vec!["A".into(), "B".into()],
/// )
/// .unwrap();
/// let result = RouteOptimizer::default().solve(&dm, 0).unwrap().unwrap();
///
/// let json = ResultReporter::default().to_json(&result).unwrap();
/// assert!(json.contains(r#""total_distance": 3.0"#));
/// ```
#[derive(Debug, Clone)]
pub struct ResultReporter {
    indent: usize,
}

impl Default for ResultReporter {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl ResultReporter {
    /// Uses `indent` spaces per nesting level.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Writes the record for `result` to `writer`.
    pub fn write_json<W: Write>(&self, result: &RouteResult, writer: W) -> Result<(), ReportError> {
        let indent = " ".repeat(self.indent);
        let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(indent.as_bytes()));
        result.to_record().serialize(&mut ser)?;
        Ok(())
    }

    /// Returns the record for `result` as a JSON string.
    pub fn to_json(&self, result: &RouteResult) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write_json(result, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the record for `result` to `path`, replacing any existing file.
    pub fn save(&self, result: &RouteResult, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let io_err = |source| ReportError::Io {
            path: path.display().to_string(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write_json(result, &mut writer)?;
        writer.flush().map_err(io_err)?;
        info!(path = %path.display(), "tour result saved to JSON file");
        Ok(())
    }
}

/// Parses a previously saved record.
pub fn read_record<R: Read>(reader: R) -> Result<RouteRecord, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Reads a previously saved record from `path`.
pub fn load_record(path: impl AsRef<Path>) -> Result<RouteRecord, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(read_record(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::solver::{RouteOptimizer, SilentObserver};
    use std::sync::Arc;

    fn result() -> RouteResult {
        let dm = DistanceMatrix::new(
            vec![
                vec![0.0, 2.0, 9.0, 10.0],
                vec![2.0, 0.0, 6.0, 4.0],
                vec![9.0, 6.0, 0.0, 3.0],
                vec![10.0, 4.0, 3.0, 0.0],
            ],
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
        )
        .expect("valid");
        RouteOptimizer::default()
            .with_observer(Arc::new(SilentObserver))
            .solve(&dm, 0)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_json_layout() {
        let json = ResultReporter::default().to_json(&result()).unwrap();
        let expected = r#"{
    "route": [
        "A",
        "B",
        "D",
        "C",
        "A"
    ],
    "total_distance": 18.0
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_custom_indent() {
        let json = ResultReporter::with_indent(2).to_json(&result()).unwrap();
        assert!(json.starts_with("{\n  \"route\": [\n    \"A\""));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsp_result.json");
        let result = result();
        ResultReporter::default().save(&result, &path).unwrap();

        let record = load_record(&path).unwrap();
        assert_eq!(record, result.to_record());
        assert_eq!(record.route.len(), 5);
        assert_eq!(record.total_distance, 18.0);
    }

    #[test]
    fn test_save_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = ResultReporter::default().save(&result(), &path).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
