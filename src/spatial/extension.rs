//! Grid padding used to grow grids outward by whole border rings
//!
//! Existing cells keep their relative positions; new cells on every side are
//! filled with a single padding value.

use ndarray::Array2;

/// Number of cells added on each side of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Rows added above
    pub top: usize,
    /// Rows added below
    pub bottom: usize,
    /// Columns added on the left
    pub left: usize,
    /// Columns added on the right
    pub right: usize,
}

impl Padding {
    /// Same padding width on all four sides
    pub const fn uniform(width: usize) -> Self {
        Self {
            top: width,
            bottom: width,
            left: width,
            right: width,
        }
    }

    /// Whether any cells would be added
    pub const fn is_empty(&self) -> bool {
        self.top + self.bottom + self.left + self.right == 0
    }
}

/// Pad a 2D array on every side
///
/// The original array is copied into the interior of a new array whose
/// remaining cells hold `padding_value`. Returns a clone when no padding is
/// requested.
pub fn pad_array_2d<T: Clone>(array: &Array2<T>, padding: &Padding, padding_value: T) -> Array2<T> {
    if padding.is_empty() {
        return array.clone();
    }

    let (old_rows, old_cols) = array.dim();
    let new_shape = (
        old_rows + padding.top + padding.bottom,
        old_cols + padding.left + padding.right,
    );

    Array2::from_shape_fn(new_shape, |(row, col)| {
        row.checked_sub(padding.top)
            .zip(col.checked_sub(padding.left))
            .and_then(|source| array.get(source))
            .unwrap_or(&padding_value)
            .clone()
    })
}

/// Wrap an array in one border ring of `value`
pub fn wrap_ring<T: Clone>(array: &Array2<T>, value: T) -> Array2<T> {
    pad_array_2d(array, &Padding::uniform(1), value)
}
