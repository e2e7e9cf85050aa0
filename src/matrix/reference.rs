//! Reference implementation of matrix addition
//!
//! This only goes through the [`Matrix`] access contract and always produces a
//! dense result. It provides a baseline for correctness testing and
//! performance comparison of the kind-dispatched [`add`](crate::matrix::add).

use crate::error::MatrixError;
use crate::matrix::{DenseMatrix, Matrix};

/// Adds two matrices of any kinds into a dense matrix, one element at a time
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] when the shapes differ.
pub fn reference_add<A, B>(a: &A, b: &B) -> Result<DenseMatrix<A::Element>, MatrixError>
where
    A: Matrix,
    B: Matrix<Element = A::Element>,
{
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let (height, width) = a.dimensions();
    let mut result = DenseMatrix::new(height, width);

    for col in 0..width {
        for row in 0..height {
            let value = a.get(row, col)? + b.get(row, col)?;
            result.set(row, col, value)?;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{DiagonalMatrix, UpperTriangularMatrix};

    #[test]
    fn test_reference_addition() {
        // A = [1 2; 0 3], B = diag(4, 5) with 1 elsewhere
        // A + B = [5 3; 1 8]
        let a = UpperTriangularMatrix::from_fn(2, 2, 0, |row, col| match (row, col) {
            (0, 0) => 1,
            (0, 1) => 2,
            _ => 3,
        });
        let b = DiagonalMatrix::from_diagonal(2, 2, vec![4, 5], 1);

        let result = reference_add(&a, &b).unwrap();

        assert_eq!(result, DenseMatrix::from_row_major(2, 2, vec![5, 3, 1, 8]));
    }

    #[test]
    fn test_reference_dimension_mismatch() {
        let a = DenseMatrix::<i32>::new(2, 3);
        let b = DenseMatrix::<i32>::new(3, 2);

        assert!(matches!(
            reference_add(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }
}
