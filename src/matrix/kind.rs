//! Runtime choice between the storage kinds

use std::fmt;

use crate::error::MatrixError;
use crate::matrix::{DenseMatrix, DiagonalMatrix, Element, Matrix, UpperTriangularMatrix};

/// The storage kind of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Every coordinate has its own storage
    Dense,
    /// Packed upper triangle, one shared value below the diagonal
    UpperTriangular,
    /// Diagonal only, one shared value elsewhere
    Diagonal,
}

impl MatrixKind {
    /// All kinds, densest first
    pub const ALL: [MatrixKind; 3] = [
        MatrixKind::Dense,
        MatrixKind::UpperTriangular,
        MatrixKind::Diagonal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Dense => "dense",
            MatrixKind::UpperTriangular => "upper triangular",
            MatrixKind::Diagonal => "diagonal",
        }
    }

    /// Kind of the matrix produced by adding a matrix of this kind to one of `other`
    ///
    /// The result keeps the sparsest structure both operands share: dense
    /// absorbs anything, triangular absorbs diagonal.
    pub fn sum_kind(self, other: MatrixKind) -> MatrixKind {
        match (self, other) {
            (MatrixKind::Dense, _) | (_, MatrixKind::Dense) => MatrixKind::Dense,
            (MatrixKind::UpperTriangular, _) | (_, MatrixKind::UpperTriangular) => {
                MatrixKind::UpperTriangular
            }
            (MatrixKind::Diagonal, MatrixKind::Diagonal) => MatrixKind::Diagonal,
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matrix of any storage kind, owned by value
///
/// This is what [`add`](crate::matrix::add) takes and returns: the concrete
/// kind of either operand is only known at runtime, and the kind of the sum
/// depends on both.
#[derive(Clone, PartialEq)]
pub enum AnyMatrix<T> {
    Dense(DenseMatrix<T>),
    UpperTriangular(UpperTriangularMatrix<T>),
    Diagonal(DiagonalMatrix<T>),
}

impl<T: Element> AnyMatrix<T> {
    pub fn kind(&self) -> MatrixKind {
        match self {
            AnyMatrix::Dense(_) => MatrixKind::Dense,
            AnyMatrix::UpperTriangular(_) => MatrixKind::UpperTriangular,
            AnyMatrix::Diagonal(_) => MatrixKind::Diagonal,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix<T>> {
        match self {
            AnyMatrix::Dense(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn as_upper_triangular(&self) -> Option<&UpperTriangularMatrix<T>> {
        match self {
            AnyMatrix::UpperTriangular(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn as_diagonal(&self) -> Option<&DiagonalMatrix<T>> {
        match self {
            AnyMatrix::Diagonal(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// Adds `other` to this matrix, see [`add`](crate::matrix::add)
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] when the shapes differ.
    pub fn try_add(&self, other: &AnyMatrix<T>) -> Result<AnyMatrix<T>, MatrixError> {
        crate::matrix::add(self, other)
    }
}

impl<T: Element> Matrix for AnyMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        match self {
            AnyMatrix::Dense(matrix) => matrix.dimensions(),
            AnyMatrix::UpperTriangular(matrix) => matrix.dimensions(),
            AnyMatrix::Diagonal(matrix) => matrix.dimensions(),
        }
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        match self {
            AnyMatrix::Dense(matrix) => matrix.get_element(row, col),
            AnyMatrix::UpperTriangular(matrix) => matrix.get_element(row, col),
            AnyMatrix::Diagonal(matrix) => matrix.get_element(row, col),
        }
    }

    fn get_element_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match self {
            AnyMatrix::Dense(matrix) => matrix.get_element_mut(row, col),
            AnyMatrix::UpperTriangular(matrix) => matrix.get_element_mut(row, col),
            AnyMatrix::Diagonal(matrix) => matrix.get_element_mut(row, col),
        }
    }

    fn trace(&self) -> T {
        match self {
            AnyMatrix::Dense(matrix) => matrix.trace(),
            AnyMatrix::UpperTriangular(matrix) => matrix.trace(),
            AnyMatrix::Diagonal(matrix) => matrix.trace(),
        }
    }

    fn render(&self) -> String {
        match self {
            AnyMatrix::Dense(matrix) => matrix.render(),
            AnyMatrix::UpperTriangular(matrix) => matrix.render(),
            AnyMatrix::Diagonal(matrix) => matrix.render(),
        }
    }
}

impl<T> From<DenseMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: DenseMatrix<T>) -> Self {
        AnyMatrix::Dense(matrix)
    }
}

impl<T> From<UpperTriangularMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: UpperTriangularMatrix<T>) -> Self {
        AnyMatrix::UpperTriangular(matrix)
    }
}

impl<T> From<DiagonalMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: DiagonalMatrix<T>) -> Self {
        AnyMatrix::Diagonal(matrix)
    }
}

impl<T: Element> fmt::Display for AnyMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: Element> fmt::Debug for AnyMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyMatrix::Dense(matrix) => fmt::Debug::fmt(matrix, f),
            AnyMatrix::UpperTriangular(matrix) => fmt::Debug::fmt(matrix, f),
            AnyMatrix::Diagonal(matrix) => fmt::Debug::fmt(matrix, f),
        }
    }
}
