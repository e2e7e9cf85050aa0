//! Upper-triangular matrix with packed storage

use std::fmt;

use crate::matrix::layout::{
    upper_triangular_len, upper_triangular_offset, upper_triangular_slot, Slot,
};
use crate::matrix::{render_cells, Element, Matrix};

/// An upper-triangular matrix
///
/// Only the cells with `row <= col` have their own storage, packed row after
/// row. Every cell below the diagonal reads and writes one shared value, so
/// writing (2, 0) also changes (1, 0), (3, 1) and so on.
#[derive(Clone, PartialEq)]
pub struct UpperTriangularMatrix<T> {
    /// Number of rows in the matrix
    pub(crate) height: usize,

    /// Number of columns in the matrix
    pub(crate) width: usize,

    /// Packed upper triangle (size: `upper_triangular_len(height, width)`)
    pub(crate) data: Vec<T>,

    /// Value shared by every coordinate below the diagonal
    pub(crate) below_diagonal: T,
}

impl<T: Element> UpperTriangularMatrix<T> {
    /// Creates a `height` × `width` matrix with a zero upper triangle
    pub fn new(height: usize, width: usize, below_diagonal: T) -> Self {
        Self {
            height,
            width,
            data: vec![T::zero(); upper_triangular_len(height, width)],
            below_diagonal,
        }
    }

    /// Creates a matrix whose upper triangle is `f(row, col)`
    ///
    /// `f` is only called for coordinates with `row <= col`.
    pub fn from_fn<F>(height: usize, width: usize, below_diagonal: T, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(upper_triangular_len(height, width));
        for row in 0..height.min(width) {
            for col in row..width {
                data.push(f(row, col));
            }
        }

        Self {
            height,
            width,
            data,
            below_diagonal,
        }
    }

    /// The value shared by every coordinate below the diagonal
    pub fn below_diagonal(&self) -> T {
        self.below_diagonal
    }

    pub fn set_below_diagonal(&mut self, value: T) {
        self.below_diagonal = value;
    }

    /// The packed upper triangle, row after row
    pub fn as_packed_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> Matrix for UpperTriangularMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        match upper_triangular_slot(row, col, self.height, self.width)? {
            Slot::Cell(offset) => Some(self.data[offset]),
            Slot::Shared => Some(self.below_diagonal),
        }
    }

    fn get_element_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match upper_triangular_slot(row, col, self.height, self.width)? {
            Slot::Cell(offset) => Some(&mut self.data[offset]),
            Slot::Shared => Some(&mut self.below_diagonal),
        }
    }

    /// Walks the packed diagonal directly: the diagonal cell of row `i + 1`
    /// sits `width - i` cells after the one of row `i`.
    fn trace(&self) -> T {
        let mut sum = T::zero();
        let mut offset = 0;
        for i in 0..self.height.min(self.width) {
            sum = sum + self.data[offset];
            offset += self.width - i;
        }
        sum
    }

    fn render(&self) -> String {
        render_cells(self.height, self.width, |row, col| {
            if row <= col {
                self.data[upper_triangular_offset(row, col, self.width)]
            } else {
                self.below_diagonal
            }
        })
    }
}

impl<T: Element> fmt::Debug for UpperTriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UpperTriangularMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.height, self.width)?;
        writeln!(f, "  packed cells: {}", self.data.len())?;
        writeln!(f, "  below diagonal: {:?}", self.below_diagonal)?;

        let max_elements = 8.min(self.data.len());
        if max_elements > 0 {
            write!(f, "  packed sample: ")?;
            for value in &self.data[..max_elements] {
                write!(f, "{:?} ", value)?;
            }
            if self.data.len() > max_elements {
                write!(f, "... ({} more)", self.data.len() - max_elements)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
