//! Dense matrix stored in column-major order

use std::fmt;

use crate::matrix::layout::dense_offset;
use crate::matrix::{Element, Matrix};

/// A dense matrix where every coordinate has its own storage
///
/// Elements are kept in one contiguous vector in column-major order, so
/// (row, col) lives at `row + col * height`.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Number of rows in the matrix
    pub(crate) height: usize,

    /// Number of columns in the matrix
    pub(crate) width: usize,

    /// Column-major values (size: height * width)
    pub(crate) data: Vec<T>,
}

impl<T: Element> DenseMatrix<T> {
    /// Creates a `height` × `width` matrix filled with zeros
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, T::zero())
    }

    /// Creates a `height` × `width` matrix with every element set to `value`
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }

    /// Creates a matrix whose element at (row, col) is `f(row, col)`
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(height * width);
        for col in 0..width {
            for row in 0..height {
                data.push(f(row, col));
            }
        }

        Self {
            height,
            width,
            data,
        }
    }

    /// Creates a matrix from values listed column by column
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `height * width`.
    pub fn from_column_major(height: usize, width: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            height * width,
            "data.len() must be height * width"
        );

        Self {
            height,
            width,
            data,
        }
    }

    /// Creates a matrix from values listed row by row
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `height * width`.
    pub fn from_row_major(height: usize, width: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            height * width,
            "data.len() must be height * width"
        );

        Self::from_fn(height, width, |row, col| data[row * width + col])
    }

    /// The column-major storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> Matrix for DenseMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        dense_offset(row, col, self.height, self.width).map(|offset| self.data[offset])
    }

    fn get_element_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let offset = dense_offset(row, col, self.height, self.width)?;
        Some(&mut self.data[offset])
    }
}

impl<T: Element> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.height, self.width)?;

        let max_rows_to_print = 5.min(self.height);
        let max_cols_to_print = 5.min(self.width);

        for row in 0..max_rows_to_print {
            write!(f, "    row {}: ", row)?;
            for col in 0..max_cols_to_print {
                write!(f, "{:?} ", self.data[row + col * self.height])?;
            }
            if self.width > max_cols_to_print {
                write!(f, "... ({} more)", self.width - max_cols_to_print)?;
            }
            writeln!(f)?;
        }

        if self.height > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.height - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}
