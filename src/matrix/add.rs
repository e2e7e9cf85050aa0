//! Element-wise addition of two matrices of any storage kinds
//!
//! Both operands arrive as [`AnyMatrix`], so neither kind is known until
//! runtime. One `match` over the pair picks the result kind from
//! [`MatrixKind::sum_kind`] and the algorithm that fits both layouts:
//!
//! | A          | B          | Result     |
//! |------------|------------|------------|
//! | Dense      | anything   | Dense      |
//! | Triangular | Triangular | Triangular |
//! | Triangular | Diagonal   | Triangular |
//! | Diagonal   | Diagonal   | Diagonal   |
//!
//! Element addition is assumed commutative, so mixed pairs share one
//! implementation whichever side each operand is on.

use tracing::{debug, instrument};

use crate::error::MatrixError;
use crate::matrix::{
    AnyMatrix, DenseMatrix, DiagonalMatrix, Element, Matrix, MatrixKind, UpperTriangularMatrix,
};

/// Adds two matrices of the same shape
///
/// The result is a new matrix sharing no storage with either operand, with
/// `result.get(i, j) == a.get(i, j) + b.get(i, j)` for every coordinate.
/// Shared values are summed as values: the triangular below-diagonal value of
/// the sum is the sum of the operands' values at those coordinates.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] when `a` and `b` differ in height or
/// width. The check happens before anything is allocated.
///
/// # Examples
///
/// ```
/// use polymat::{add, AnyMatrix, DiagonalMatrix, Matrix, MatrixKind, UpperTriangularMatrix};
///
/// let a: AnyMatrix<i32> = UpperTriangularMatrix::new(3, 3, 1).into();
/// let b: AnyMatrix<i32> = DiagonalMatrix::identity(3).into();
///
/// let c = add(&a, &b).unwrap();
/// assert_eq!(c.kind(), MatrixKind::UpperTriangular);
/// assert_eq!(c.trace(), 3);
/// assert_eq!(c.get(2, 0).unwrap(), 1);
/// ```
#[instrument(level = "debug", skip_all, fields(left = %a.kind(), right = %b.kind()))]
pub fn add<T: Element>(a: &AnyMatrix<T>, b: &AnyMatrix<T>) -> Result<AnyMatrix<T>, MatrixError> {
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let result = match (a, b) {
        (AnyMatrix::Dense(x), AnyMatrix::Dense(y)) => AnyMatrix::Dense(add_dense(x, y)),
        (AnyMatrix::Dense(dense), other) | (other, AnyMatrix::Dense(dense)) => {
            AnyMatrix::Dense(add_into_dense(dense, other))
        }
        (AnyMatrix::UpperTriangular(x), AnyMatrix::UpperTriangular(y)) => {
            AnyMatrix::UpperTriangular(add_triangular(x, y))
        }
        (AnyMatrix::UpperTriangular(tri), AnyMatrix::Diagonal(diag))
        | (AnyMatrix::Diagonal(diag), AnyMatrix::UpperTriangular(tri)) => {
            AnyMatrix::UpperTriangular(add_triangular_diagonal(tri, diag))
        }
        (AnyMatrix::Diagonal(x), AnyMatrix::Diagonal(y)) => AnyMatrix::Diagonal(add_diagonal(x, y)),
    };

    debug_assert_eq!(result.kind(), a.kind().sum_kind(b.kind()));
    debug!(result = %result.kind(), dims = ?result.dimensions(), "matrices added");

    Ok(result)
}

/// Kind of the matrix [`add`] returns for these operands
pub fn result_kind<T: Element>(a: &AnyMatrix<T>, b: &AnyMatrix<T>) -> MatrixKind {
    a.kind().sum_kind(b.kind())
}

fn add_dense<T: Element>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x + y)
        .collect();

    DenseMatrix {
        height: a.height,
        width: a.width,
        data,
    }
}

/// Adds any matrix onto a copy of a dense one
fn add_into_dense<T: Element>(dense: &DenseMatrix<T>, other: &AnyMatrix<T>) -> DenseMatrix<T> {
    let mut result = dense.clone();
    let height = result.height;

    for (offset, cell) in result.data.iter_mut().enumerate() {
        if let Some(value) = other.get_element(offset % height, offset / height) {
            *cell = *cell + value;
        }
    }

    result
}

fn add_triangular<T: Element>(
    a: &UpperTriangularMatrix<T>,
    b: &UpperTriangularMatrix<T>,
) -> UpperTriangularMatrix<T> {
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x + y)
        .collect();

    UpperTriangularMatrix {
        height: a.height,
        width: a.width,
        data,
        below_diagonal: a.below_diagonal + b.below_diagonal,
    }
}

/// The diagonal folds into the triangle: its diagonal lands on the packed
/// diagonal, its off-diagonal value on every other packed cell and on the
/// below-diagonal value.
fn add_triangular_diagonal<T: Element>(
    tri: &UpperTriangularMatrix<T>,
    diag: &DiagonalMatrix<T>,
) -> UpperTriangularMatrix<T> {
    let mut result = tri.clone();
    let mut offset = 0;

    for row in 0..tri.height.min(tri.width) {
        for col in row..tri.width {
            let value = if row == col {
                diag.data[row]
            } else {
                diag.off_diagonal
            };
            result.data[offset] = result.data[offset] + value;
            offset += 1;
        }
    }

    result.below_diagonal = tri.below_diagonal + diag.off_diagonal;
    result
}

fn add_diagonal<T: Element>(a: &DiagonalMatrix<T>, b: &DiagonalMatrix<T>) -> DiagonalMatrix<T> {
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x + y)
        .collect();

    DiagonalMatrix {
        height: a.height,
        width: a.width,
        data,
        off_diagonal: a.off_diagonal + b.off_diagonal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sum<T: Element>(a: &AnyMatrix<T>, b: &AnyMatrix<T>, sum: &AnyMatrix<T>) {
        let (height, width) = a.dimensions();
        assert_eq!(sum.dimensions(), (height, width));
        for i in 0..height {
            for j in 0..width {
                assert_eq!(
                    sum.get(i, j).unwrap(),
                    a.get(i, j).unwrap() + b.get(i, j).unwrap(),
                    "mismatch at ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    fn samples(height: usize, width: usize) -> Vec<AnyMatrix<i32>> {
        vec![
            DenseMatrix::from_fn(height, width, |row, col| (row * 7 + col * 3) as i32).into(),
            UpperTriangularMatrix::from_fn(height, width, -2, |row, col| (row + 2 * col) as i32)
                .into(),
            DiagonalMatrix::from_diagonal(
                height,
                width,
                (0..height.min(width)).map(|i| 10 + i as i32).collect(),
                5,
            )
            .into(),
        ]
    }

    #[test]
    fn test_every_kind_pair() {
        for &(height, width) in &[(4, 4), (2, 5), (5, 2)] {
            let matrices = samples(height, width);
            for a in &matrices {
                for b in &matrices {
                    let sum = add(a, b).unwrap();
                    assert_eq!(sum.kind(), result_kind(a, b));
                    assert_sum(a, b, &sum);
                }
            }
        }
    }

    #[test]
    fn test_triangular_diagonal_folds_off_diagonal() {
        let tri = UpperTriangularMatrix::from_fn(3, 3, 1, |_, _| 2);
        let diag = DiagonalMatrix::from_diagonal(3, 3, vec![10, 20, 30], 4);

        let sum = add_triangular_diagonal(&tri, &diag);

        assert_eq!(sum.as_packed_slice(), &[12, 6, 6, 22, 6, 32]);
        assert_eq!(sum.below_diagonal(), 5);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a: AnyMatrix<i32> = DenseMatrix::new(2, 2).into();
        let b: AnyMatrix<i32> = DiagonalMatrix::new(3, 3, 0).into();

        assert_eq!(
            add(&a, &b),
            Err(MatrixError::DimensionMismatch {
                left: (2, 2),
                right: (3, 3)
            })
        );
    }

    #[test]
    fn test_empty_operands() {
        for &(height, width) in &[(0, 0), (0, 3), (3, 0)] {
            let matrices = samples(height, width);
            for a in &matrices {
                for b in &matrices {
                    let sum = add(a, b).unwrap();
                    assert!(sum.is_empty());
                    assert_eq!(sum.dimensions(), (height, width));
                    assert_eq!(sum.kind(), result_kind(a, b));
                }
            }
        }
    }
}
