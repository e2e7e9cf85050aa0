//! Errors raised by matrix access and addition

use std::fmt;

/// Errors that can occur when accessing or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A coordinate fell outside the matrix
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    /// The operands of an addition do not have the same shape
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfRange {
                row,
                col,
                height,
                width,
            } => write!(
                f,
                "index ({}, {}) out of range for a {} × {} matrix",
                row, col, height, width
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "matrices are not the same size: {} × {} vs {} × {}",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = MatrixError::OutOfRange {
            row: 4,
            col: 1,
            height: 4,
            width: 4,
        };
        assert_eq!(err.to_string(), "index (4, 1) out of range for a 4 × 4 matrix");
    }

    #[test]
    fn test_display_dimension_mismatch() {
        let err = MatrixError::DimensionMismatch {
            left: (2, 2),
            right: (3, 3),
        };
        assert_eq!(
            err.to_string(),
            "matrices are not the same size: 2 × 2 vs 3 × 3"
        );
    }
}
