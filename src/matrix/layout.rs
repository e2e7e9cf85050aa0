//! Mapping from logical (row, col) coordinates to physical storage
//!
//! Each function checks bounds before computing an offset and returns `None`
//! for a coordinate outside the matrix.

/// Where a logical coordinate is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// An independent cell at this offset of the packed storage
    Cell(usize),
    /// The single scalar shared by every coordinate outside the packed region
    Shared,
}

/// Whether (row, col) is a valid coordinate of a `height` × `width` matrix
#[inline]
pub fn in_bounds(row: usize, col: usize, height: usize, width: usize) -> bool {
    row < height && col < width
}

/// Column-major offset of (row, col) in a dense matrix
#[inline]
pub fn dense_offset(row: usize, col: usize, height: usize, width: usize) -> Option<usize> {
    in_bounds(row, col, height, width).then(|| row + col * height)
}

/// Number of packed cells of an upper-triangular `height` × `width` matrix
///
/// A matrix taller than wide stores the full `width`-triangle. A wider one
/// drops the rows past `height`, i.e. the `d`-triangle with `d = width - height`.
pub fn upper_triangular_len(height: usize, width: usize) -> usize {
    let full = width * (width + 1) / 2;
    if height >= width {
        full
    } else {
        let excess = width - height;
        full - excess * (excess + 1) / 2
    }
}

/// Storage slot of (row, col) in a packed upper-triangular matrix
///
/// Rows are packed one after the other, row `r` holding columns `r..width`.
#[inline]
pub fn upper_triangular_slot(row: usize, col: usize, height: usize, width: usize) -> Option<Slot> {
    if !in_bounds(row, col, height, width) {
        return None;
    }
    if row > col {
        Some(Slot::Shared)
    } else {
        Some(Slot::Cell(upper_triangular_offset(row, col, width)))
    }
}

/// Packed offset of (row, col) with `row <= col`, without bounds checks
///
/// Each earlier row `r` skips the `r` cells left of its diagonal.
#[inline]
pub(crate) fn upper_triangular_offset(row: usize, col: usize, width: usize) -> usize {
    col + row * width - row * (row + 1) / 2
}

/// Storage slot of (row, col) in a diagonal matrix
#[inline]
pub fn diagonal_slot(row: usize, col: usize, height: usize, width: usize) -> Option<Slot> {
    if !in_bounds(row, col, height, width) {
        return None;
    }
    if row != col {
        Some(Slot::Shared)
    } else {
        Some(Slot::Cell(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_offset_is_column_major() {
        assert_eq!(dense_offset(0, 0, 3, 2), Some(0));
        assert_eq!(dense_offset(2, 0, 3, 2), Some(2));
        assert_eq!(dense_offset(0, 1, 3, 2), Some(3));
        assert_eq!(dense_offset(2, 1, 3, 2), Some(5));
        assert_eq!(dense_offset(3, 0, 3, 2), None);
        assert_eq!(dense_offset(0, 2, 3, 2), None);
    }

    #[test]
    fn test_upper_triangular_len() {
        assert_eq!(upper_triangular_len(4, 4), 10);
        assert_eq!(upper_triangular_len(6, 4), 10);
        // 2 x 4: rows hold 4 and 3 cells
        assert_eq!(upper_triangular_len(2, 4), 7);
        assert_eq!(upper_triangular_len(1, 3), 3);
        assert_eq!(upper_triangular_len(0, 3), 0);
        assert_eq!(upper_triangular_len(3, 0), 0);
    }

    #[test]
    fn test_upper_triangular_slots_are_dense_and_distinct() {
        for &(height, width) in &[(4, 4), (2, 5), (5, 2), (1, 1), (3, 7)] {
            let mut offsets = Vec::new();
            for row in 0..height {
                for col in 0..width {
                    match upper_triangular_slot(row, col, height, width) {
                        Some(Slot::Cell(offset)) => {
                            assert!(row <= col);
                            offsets.push(offset);
                        }
                        Some(Slot::Shared) => assert!(row > col),
                        None => panic!("({}, {}) should be in bounds", row, col),
                    }
                }
            }
            // Row-major packing visits offsets in order
            let expected: Vec<_> = (0..upper_triangular_len(height, width)).collect();
            assert_eq!(offsets, expected);
        }
    }

    #[test]
    fn test_upper_triangular_out_of_range() {
        assert_eq!(upper_triangular_slot(4, 0, 4, 4), None);
        assert_eq!(upper_triangular_slot(0, 4, 4, 4), None);
    }

    #[test]
    fn test_diagonal_slot() {
        assert_eq!(diagonal_slot(2, 2, 4, 4), Some(Slot::Cell(2)));
        assert_eq!(diagonal_slot(1, 0, 4, 4), Some(Slot::Shared));
        assert_eq!(diagonal_slot(0, 3, 4, 4), Some(Slot::Shared));
        assert_eq!(diagonal_slot(3, 3, 3, 4), None);
        assert_eq!(diagonal_slot(0, 0, 0, 0), None);
    }
}
