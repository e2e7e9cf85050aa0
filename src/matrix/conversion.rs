//! Conversion functions between storage kinds

use crate::matrix::{
    AnyMatrix, DenseMatrix, DiagonalMatrix, Element, Matrix, UpperTriangularMatrix,
};

/// Copies any matrix into dense storage
///
/// Coordinates that shared one value in `matrix` become independent cells.
pub fn to_dense<M: Matrix>(matrix: &M) -> DenseMatrix<M::Element> {
    let (height, width) = matrix.dimensions();
    DenseMatrix::from_fn(height, width, |row, col| {
        matrix
            .get_element(row, col)
            .unwrap_or_else(<M::Element as num_traits::Zero>::zero)
    })
}

impl<T: Element> AnyMatrix<T> {
    /// Converts this matrix to dense storage, moving it when it already is dense
    pub fn into_dense(self) -> DenseMatrix<T> {
        match self {
            AnyMatrix::Dense(matrix) => matrix,
            other => to_dense(&other),
        }
    }
}

impl<T: Element> DiagonalMatrix<T> {
    /// The same matrix stored as upper triangular
    ///
    /// The off-diagonal value fills both the packed cells above the diagonal
    /// and the shared below-diagonal value.
    pub fn to_upper_triangular(&self) -> UpperTriangularMatrix<T> {
        UpperTriangularMatrix::from_fn(self.height, self.width, self.off_diagonal, |row, col| {
            if row == col {
                self.data[row]
            } else {
                self.off_diagonal
            }
        })
    }
}

impl<T: Element> UpperTriangularMatrix<T> {
    /// Copies this matrix into dense storage
    pub fn to_dense(&self) -> DenseMatrix<T> {
        to_dense(self)
    }
}

impl<T: Element> DiagonalMatrix<T> {
    /// Copies this matrix into dense storage
    pub fn to_dense(&self) -> DenseMatrix<T> {
        to_dense(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_to_dense() {
        let tri = UpperTriangularMatrix::from_fn(3, 3, 0, |row, col| (row * 3 + col + 1) as i32);

        let dense = tri.to_dense();

        assert_eq!(
            dense,
            DenseMatrix::from_row_major(3, 3, vec![1, 2, 3, 0, 5, 6, 0, 0, 9])
        );
    }

    #[test]
    fn test_dense_cells_are_independent_after_conversion() {
        let diag = DiagonalMatrix::from_diagonal(3, 3, vec![1, 2, 3], 7);
        let mut dense = diag.to_dense();

        dense.set(1, 0, 0).unwrap();

        assert_eq!(dense.get(2, 0), Ok(7));
        assert_eq!(dense.get(1, 0), Ok(0));
    }

    #[test]
    fn test_diagonal_to_upper_triangular() {
        let diag = DiagonalMatrix::from_diagonal(3, 4, vec![1, 2, 3], 9);
        let tri = diag.to_upper_triangular();

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(tri.get(row, col), diag.get(row, col));
            }
        }
        assert_eq!(tri.trace(), diag.trace());
    }

    #[test]
    fn test_into_dense() {
        let dense = DenseMatrix::from_row_major(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(AnyMatrix::from(dense.clone()).into_dense(), dense);

        let diag: AnyMatrix<i32> = DiagonalMatrix::identity(2).into();
        assert_eq!(
            diag.into_dense(),
            DenseMatrix::from_row_major(2, 2, vec![1, 0, 0, 1])
        );
    }
}
