//! Utilities for converting between our matrix kinds and external libraries

use ndarray::Array2;
use num_traits::Zero;
use sprs::{CsMat, TriMat};

use crate::matrix::{DenseMatrix, Element, Matrix};

/// Copies any matrix into an ndarray `Array2`
pub fn to_ndarray<M: Matrix>(matrix: &M) -> Array2<M::Element> {
    Array2::from_shape_fn(matrix.dimensions(), |(row, col)| {
        matrix
            .get_element(row, col)
            .unwrap_or_else(M::Element::zero)
    })
}

/// Converts an ndarray `Array2` to our dense matrix
pub fn dense_from_ndarray<T: Element>(array: &Array2<T>) -> DenseMatrix<T> {
    let (height, width) = array.dim();
    DenseMatrix::from_fn(height, width, |row, col| array[[row, col]])
}

/// Converts any matrix to sprs CsMat in CSR format, keeping the non-zero cells
///
/// A non-zero shared value turns into one stored entry per coordinate that
/// shares it.
pub fn to_sprs_csr<M: Matrix>(matrix: &M) -> CsMat<M::Element> {
    let (height, width) = matrix.dimensions();
    let mut triplets = TriMat::new((height, width));

    for row in 0..height {
        for col in 0..width {
            if let Some(value) = matrix.get_element(row, col) {
                if !value.is_zero() {
                    triplets.add_triplet(row, col, value);
                }
            }
        }
    }

    triplets.to_csr()
}

/// Converts a sprs CsMat (CSR or CSC) to our dense matrix
pub fn dense_from_sprs<T: Element>(matrix: &CsMat<T>) -> DenseMatrix<T> {
    let (height, width) = matrix.shape();
    let mut dense = DenseMatrix::new(height, width);

    for (&value, (row, col)) in matrix.iter() {
        dense.data[row + col * height] = value;
    }

    dense
}
