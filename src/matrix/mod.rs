//! Matrix storage kinds and the access contract they share

use std::fmt;

use num_traits::{Num, Zero};

use crate::error::MatrixError;

pub mod add;
pub mod config;
pub mod conversion;
pub mod dense;
pub mod diagonal;
pub mod kind;
pub mod layout;
pub mod reference;
pub mod triangular;

pub use add::add;
pub use config::TraceTimingConfig;
pub use conversion::to_dense;
pub use dense::DenseMatrix;
pub use diagonal::DiagonalMatrix;
pub use kind::{AnyMatrix, MatrixKind};
pub use layout::Slot;
pub use reference::reference_add;
pub use triangular::UpperTriangularMatrix;

/// Numeric types a matrix can hold
///
/// Addition and the additive identity come from [`Num`]; `Display` is needed
/// to render the matrix as text.
pub trait Element: Copy + Num + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: Copy + Num + fmt::Display + fmt::Debug {}

/// Element access, trace and printing, shared by every storage kind
///
/// A storage kind only has to provide [`Matrix::dimensions`],
/// [`Matrix::get_element`] and [`Matrix::get_element_mut`]. Everything else has
/// a default expressed through element access, which kinds with a known
/// structure may override as long as the result is unchanged.
pub trait Matrix {
    type Element: Element;

    /// Matrix dimensions as (height, width)
    fn dimensions(&self) -> (usize, usize);

    /// Reads the element at (row, col), or `None` outside the matrix
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Mutable access to the storage behind (row, col), or `None` outside the matrix
    ///
    /// Coordinates that share one stored value all hand out the same reference.
    fn get_element_mut(&mut self, row: usize, col: usize) -> Option<&mut Self::Element>;

    fn height(&self) -> usize {
        self.dimensions().0
    }

    fn width(&self) -> usize {
        self.dimensions().1
    }

    /// True when the matrix has no valid coordinate
    fn is_empty(&self) -> bool {
        let (height, width) = self.dimensions();
        height == 0 || width == 0
    }

    /// Reads the element at (row, col)
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] when `row >= height` or `col >= width`.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element, MatrixError> {
        let (height, width) = self.dimensions();
        self.get_element(row, col).ok_or(MatrixError::OutOfRange {
            row,
            col,
            height,
            width,
        })
    }

    /// Mutable access to the element at (row, col)
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] when `row >= height` or `col >= width`.
    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Element, MatrixError> {
        let (height, width) = self.dimensions();
        self.get_element_mut(row, col).ok_or(MatrixError::OutOfRange {
            row,
            col,
            height,
            width,
        })
    }

    /// Writes `value` at (row, col)
    ///
    /// For triangular and diagonal matrices a write to the shared region
    /// changes every coordinate of that region.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] when `row >= height` or `col >= width`. Nothing
    /// is written in that case.
    fn set(&mut self, row: usize, col: usize, value: Self::Element) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Sum of the elements on the main diagonal
    fn trace(&self) -> Self::Element {
        let n = self.height().min(self.width());
        (0..n)
            .filter_map(|i| self.get_element(i, i))
            .fold(Self::Element::zero(), |acc, value| acc + value)
    }

    /// Renders the matrix row by row, each cell followed by a tab
    fn render(&self) -> String {
        let (height, width) = self.dimensions();
        render_cells(height, width, |i, j| {
            self.get_element(i, j).unwrap_or_else(Self::Element::zero)
        })
    }

    /// Writes [`Matrix::render`] to standard output
    fn print(&self) {
        print!("{}", self.render());
    }
}

/// Builds the tab separated rendering of a `height` × `width` grid
pub(crate) fn render_cells<T, F>(height: usize, width: usize, mut cell: F) -> String
where
    T: fmt::Display,
    F: FnMut(usize, usize) -> T,
{
    let mut out = String::new();
    for i in 0..height {
        for j in 0..width {
            out.push_str(&cell(i, j).to_string());
            out.push('\t');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cells() {
        let text = render_cells(2, 3, |i, j| i * 10 + j);
        assert_eq!(text, "0\t1\t2\t\n10\t11\t12\t\n");
    }

    #[test]
    fn test_render_cells_empty() {
        assert_eq!(render_cells(0, 3, |_, _| 0), "");
        assert_eq!(render_cells(2, 0, |_, _| 0), "\n\n");
    }
}
