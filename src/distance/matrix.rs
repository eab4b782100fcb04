//! Dense labelled distance matrix.

use super::MatrixError;
use crate::models::Location;

/// A validated n×n distance matrix stored in row-major order, with one label
/// per location.
///
/// Every entry is finite and non-negative, the diagonal is zero, and `n >= 2`.
/// Symmetry is not required. An arc may be marked disallowed through
/// [`DistanceMatrix::with_arcs`]; [`DistanceMatrix::distance`] reports such an
/// arc as `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::new(
///     vec![vec![0.0, 5.0], vec![7.0, 0.0]],
///     vec!["depot".into(), "shop".into()],
/// )
/// .unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.distance(1, 0), 7.0);
/// assert_eq!(dm.label(1), "shop");
/// assert!(!dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    labels: Vec<String>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix from a table where every arc is allowed.
    ///
    /// # Errors
    ///
    /// Shape errors for a non-square table or a label count that differs
    /// from the row count; value errors for negative or non-finite entries,
    /// a non-zero diagonal, or fewer than two locations.
    pub fn new(rows: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Self, MatrixError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::with_arcs(rows, labels)
    }

    /// Creates a matrix from a table where `None` marks a disallowed arc.
    ///
    /// Diagonal entries must be `Some(0.0)`.
    ///
    /// # Errors
    ///
    /// Same as [`DistanceMatrix::new`].
    pub fn with_arcs(rows: Vec<Vec<Option<f64>>>, labels: Vec<String>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MatrixError::NotSquare {
                row,
                len: r.len(),
                expected: size,
            });
        }
        if labels.len() != size {
            return Err(MatrixError::LabelCount {
                labels: labels.len(),
                size,
            });
        }
        if size < 2 {
            return Err(MatrixError::TooSmall { size });
        }

        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.into_iter().enumerate() {
            for (to, entry) in row.into_iter().enumerate() {
                let value = match entry {
                    Some(v) if !v.is_finite() || v < 0.0 => {
                        return Err(MatrixError::InvalidDistance { from, to, value: v });
                    }
                    Some(v) if from == to && v != 0.0 => {
                        return Err(MatrixError::NonZeroDiagonal { index: from });
                    }
                    None if from == to => {
                        return Err(MatrixError::NonZeroDiagonal { index: from });
                    }
                    Some(v) => v,
                    None => f64::INFINITY,
                };
                data.push(value);
            }
        }

        Ok(Self { data, labels, size })
    }

    /// Computes a great-circle distance matrix (miles) from named coordinates.
    ///
    /// # Errors
    ///
    /// [`MatrixError::TooSmall`] for fewer than two locations, or
    /// [`MatrixError::InvalidDistance`] if a coordinate is not finite.
    pub fn from_locations(locations: &[Location]) -> Result<Self, MatrixError> {
        let n = locations.len();
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        let labels = locations.iter().map(|l| l.name().to_string()).collect();
        Self::new(rows, labels)
    }

    /// Returns the distance from location `from` to location `to`, or
    /// `f64::INFINITY` if the arc is disallowed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or `None` if the arc is
    /// disallowed.
    pub fn arc(&self, from: usize, to: usize) -> Option<f64> {
        let d = self.distance(from, to);
        d.is_finite().then_some(d)
    }

    /// Returns `true` if travel from `from` to `to` is permitted.
    pub fn is_allowed(&self, from: usize, to: usize) -> bool {
        self.arc(from, to).is_some()
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Label of location `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the first location carrying `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// A disallowed arc only matches a disallowed arc.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                match (self.arc(i, j), self.arc(j, i)) {
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{i}")).collect()
    }

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new("Chicago", 41.8781, -87.6298),
            Location::new("Aurora", 41.7606, -88.3201),
            Location::new("Rockford", 42.2711, -89.0937),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations()).expect("valid");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.label(2), "Rockford");
        assert_eq!(dm.distance(0, 0), 0.0);
        assert!(dm.distance(0, 1) > 0.0);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_locations_too_few() {
        let one = &sample_locations()[..1];
        assert_eq!(
            DistanceMatrix::from_locations(one),
            Err(MatrixError::TooSmall { size: 1 })
        );
    }

    #[test]
    fn test_not_square() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]], labels(2)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]], labels(3)).unwrap_err();
        assert!(matches!(err, MatrixError::LabelCount { labels: 3, size: 2 }));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_degenerate_sizes() {
        let err = DistanceMatrix::new(vec![vec![0.0]], labels(1)).unwrap_err();
        assert_eq!(err, MatrixError::TooSmall { size: 1 });
        assert!(err.is_invalid_value());

        let err = DistanceMatrix::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, MatrixError::TooSmall { size: 0 });
    }

    #[test]
    fn test_negative_entry() {
        let err = DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]], labels(2)).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidDistance { from: 0, to: 1, .. }));
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_non_finite_entries() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![bad, 0.0]], labels(2)).unwrap_err();
            assert!(matches!(err, MatrixError::InvalidDistance { from: 1, to: 0, .. }));
        }
    }

    #[test]
    fn test_non_zero_diagonal() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 2.0]], labels(2)).unwrap_err();
        assert_eq!(err, MatrixError::NonZeroDiagonal { index: 1 });

        let err = DistanceMatrix::with_arcs(
            vec![vec![None, Some(1.0)], vec![Some(1.0), Some(0.0)]],
            labels(2),
        )
        .unwrap_err();
        assert_eq!(err, MatrixError::NonZeroDiagonal { index: 0 });
    }

    #[test]
    fn test_disallowed_arc() {
        let dm = DistanceMatrix::with_arcs(
            vec![vec![Some(0.0), None], vec![Some(3.0), Some(0.0)]],
            labels(2),
        )
        .expect("valid");
        assert_eq!(dm.arc(0, 1), None);
        assert_eq!(dm.arc(1, 0), Some(3.0));
        assert!(dm.distance(0, 1).is_infinite());
        assert!(!dm.is_allowed(0, 1));
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_index_of_first_match() {
        let dm = DistanceMatrix::new(
            vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
            vec!["x".into(), "y".into(), "y".into()],
        )
        .expect("valid");
        assert_eq!(dm.index_of("y"), Some(1));
        assert_eq!(dm.index_of("z"), None);
        assert_eq!(dm.labels().len(), 3);
    }
}
