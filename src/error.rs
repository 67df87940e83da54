//! Error taxonomy for complex construction and homology computation.
//!
//! Two failure classes exist:
//!
//! - **DimensionMismatch**: two points of unequal ambient dimension were
//!   compared. Point clouds passed as `Array2<f64>` are rectangular and
//!   cannot trigger this; it arises only through the slice-level
//!   [`euclidean_distance`](crate::geometry::euclidean_distance).
//! - **ShapeMismatch**: a pair of boundary matrices whose shapes do not
//!   compose was handed to the reduction engine. This aborts the homology
//!   computation; no partial Betti sequence is returned.
//!
//! All operations are deterministic, so neither error is retryable.

use thiserror::Error;

/// Errors raised by the geometry and reduction layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Two points of different ambient dimension were compared.
    #[error("point dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The matrices passed to simultaneous reduction do not represent
    /// composable linear maps.
    #[error("matrices have the wrong shape: {lhs_cols} columns against {rhs_rows} rows")]
    ShapeMismatch { lhs_cols: usize, rhs_rows: usize },
}

/// Result alias used throughout the crate.
pub type TopologyResult<T> = Result<T, TopologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = TopologyError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "point dimension mismatch: expected 2, got 3"
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = TopologyError::ShapeMismatch {
            lhs_cols: 5,
            rhs_rows: 4,
        };
        assert_eq!(
            err.to_string(),
            "matrices have the wrong shape: 5 columns against 4 rows"
        );
    }
}
