//! Diagonal matrix storing only its main diagonal

use std::fmt;

use crate::matrix::layout::{diagonal_slot, Slot};
use crate::matrix::{render_cells, Element, Matrix};

/// A diagonal matrix
///
/// The `min(height, width)` diagonal cells have their own storage. Every
/// other coordinate reads and writes one shared value.
#[derive(Clone, PartialEq)]
pub struct DiagonalMatrix<T> {
    /// Number of rows in the matrix
    pub(crate) height: usize,

    /// Number of columns in the matrix
    pub(crate) width: usize,

    /// Diagonal values (size: min(height, width))
    pub(crate) data: Vec<T>,

    /// Value shared by every off-diagonal coordinate
    pub(crate) off_diagonal: T,
}

impl<T: Element> DiagonalMatrix<T> {
    /// Creates a `height` × `width` matrix with a zero diagonal
    pub fn new(height: usize, width: usize, off_diagonal: T) -> Self {
        Self {
            height,
            width,
            data: vec![T::zero(); height.min(width)],
            off_diagonal,
        }
    }

    /// Creates a matrix from its diagonal values
    ///
    /// # Panics
    ///
    /// Panics if `diagonal.len()` is not `min(height, width)`.
    pub fn from_diagonal(height: usize, width: usize, diagonal: Vec<T>, off_diagonal: T) -> Self {
        assert_eq!(
            diagonal.len(),
            height.min(width),
            "diagonal.len() must be min(height, width)"
        );

        Self {
            height,
            width,
            data: diagonal,
            off_diagonal,
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            height: n,
            width: n,
            data: vec![T::one(); n],
            off_diagonal: T::zero(),
        }
    }

    /// The diagonal values
    pub fn diagonal(&self) -> &[T] {
        &self.data
    }

    /// The value shared by every off-diagonal coordinate
    pub fn off_diagonal(&self) -> T {
        self.off_diagonal
    }

    pub fn set_off_diagonal(&mut self, value: T) {
        self.off_diagonal = value;
    }
}

impl<T: Element> Matrix for DiagonalMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        match diagonal_slot(row, col, self.height, self.width)? {
            Slot::Cell(offset) => Some(self.data[offset]),
            Slot::Shared => Some(self.off_diagonal),
        }
    }

    fn get_element_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match diagonal_slot(row, col, self.height, self.width)? {
            Slot::Cell(offset) => Some(&mut self.data[offset]),
            Slot::Shared => Some(&mut self.off_diagonal),
        }
    }

    fn trace(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &value| acc + value)
    }

    fn render(&self) -> String {
        render_cells(self.height, self.width, |row, col| {
            if row == col {
                self.data[row]
            } else {
                self.off_diagonal
            }
        })
    }
}

impl<T: Element> fmt::Debug for DiagonalMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DiagonalMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.height, self.width)?;
        writeln!(f, "  off diagonal: {:?}", self.off_diagonal)?;

        let max_elements = 8.min(self.data.len());
        if max_elements > 0 {
            write!(f, "  diagonal: ")?;
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
