//! Conversions between storage kinds and to external libraries

use polymat::{
    dense_from_ndarray, dense_from_sprs, to_ndarray, to_sprs_csr, AnyMatrix, DenseMatrix,
    DiagonalMatrix, Matrix, UpperTriangularMatrix,
};

#[test]
fn test_ndarray_matches_element_access() {
    let tri = UpperTriangularMatrix::from_fn(3, 5, 2.5, |row, col| (row * 5 + col) as f64);

    let array = to_ndarray(&tri);

    for ((row, col), &value) in array.indexed_iter() {
        assert_eq!(value, tri.get(row, col).unwrap());
    }
    assert_eq!(dense_from_ndarray(&array), tri.to_dense());
}

#[test]
fn test_sprs_keeps_nonzero_cells() {
    let diag: AnyMatrix<i32> = DiagonalMatrix::identity(4).into();

    let csr = to_sprs_csr(&diag);

    assert_eq!(csr.nnz(), 4);
    assert_eq!(dense_from_sprs(&csr), diag.into_dense());
}

#[test]
fn test_shared_value_becomes_independent_cells() {
    let diag = DiagonalMatrix::from_diagonal(3, 3, vec![1, 2, 3], 9);

    let mut tri = diag.to_upper_triangular();
    assert_eq!(tri.trace(), 6);
    tri.set(0, 1, 0).unwrap();
    // The triangle packs (0, 1) on its own, the diagonal shared it with (0, 2)
    assert_eq!(tri.get(0, 2), Ok(9));

    let mut dense = diag.to_dense();
    dense.set(2, 0, 0).unwrap();
    assert_eq!(dense.get(1, 0), Ok(9));
}

#[test]
fn test_dense_roundtrip_through_sprs() {
    let dense = DenseMatrix::from_row_major(2, 3, vec![0, 1, 0, 2, 0, 3]);

    let csr = to_sprs_csr(&dense);

    assert_eq!(csr.nnz(), 3);
    assert_eq!(dense_from_sprs(&csr), dense);
}
