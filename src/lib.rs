//! # polymat: polymorphic matrix storage
//!
//! Three ways of storing a matrix behind one element-access contract, and an
//! addition that picks the result's storage from the kinds of both operands.
//!
//! ## Storage kinds
//!
//! - **Dense**: every element stored, column-major.
//! - **Upper triangular**: the `row <= col` half packed row by row, one value
//!   shared by every cell below the diagonal.
//! - **Diagonal**: the `min(height, width)` diagonal cells, one value shared by
//!   every other cell.
//!
//! Writing through a shared coordinate changes every coordinate sharing that
//! value. This is part of the contract, not an accident.
//!
//! ## Usage
//!
//! ```
//! use polymat::{AnyMatrix, DenseMatrix, DiagonalMatrix, Matrix, MatrixKind, add};
//!
//! let mut diag = DiagonalMatrix::from_diagonal(4, 4, vec![10, 11, 13, 13], 1);
//! assert_eq!(diag.trace(), 47);
//! assert_eq!(diag.get(0, 1).unwrap(), 1);
//!
//! // One value backs all off-diagonal cells
//! diag.set(1, 0, 99).unwrap();
//! assert_eq!(diag.get(3, 0).unwrap(), 99);
//!
//! let a: AnyMatrix<i32> = DenseMatrix::filled(4, 4, 1).into();
//! let b: AnyMatrix<i32> = diag.into();
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.kind(), MatrixKind::Dense);
//! assert_eq!(sum.get(3, 3).unwrap(), 14);
//! ```

pub mod error;
pub mod matrix;
pub mod timing;
pub mod utils;

// Re-export primary components
pub use error::MatrixError;
pub use matrix::add::result_kind;
pub use matrix::{add, reference_add, to_dense};
pub use matrix::{AnyMatrix, DenseMatrix, DiagonalMatrix, Element, Matrix, MatrixKind, Slot};
pub use matrix::{TraceTimingConfig, UpperTriangularMatrix};
pub use timing::{run_trace_timings, time_trace, TraceTiming};
pub use utils::{dense_from_ndarray, dense_from_sprs, to_ndarray, to_sprs_csr};

/// Version information for the polymat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
