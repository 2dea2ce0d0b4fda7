//! Placement of one-dimensional value lines onto a grid
//!
//! Every expansion strategy first resizes its seed into a line and then lays
//! that line out in one of a few fixed ways. Keeping the index arithmetic
//! here means repeat, mirror and gradient strategies share one definition of
//! "across rows" or "along a diagonal".

use crate::io::error::{Result, computation_error};
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Build a grid where cell (`row`, `col`) takes `line[index(row, col)]`
///
/// # Errors
///
/// Returns `Computation` if `index` points outside `line`
pub fn place_with<T, F>(spec: GridSpec, line: &[T], index: F) -> Result<ExpandedGrid<T>>
where
    T: Clone,
    F: Fn(usize, usize) -> usize,
{
    let cells = (0..spec.rows())
        .flat_map(|row| (0..spec.cols()).map(move |col| (row, col)))
        .map(|(row, col)| {
            let position = index(row, col);
            line.get(position).cloned().ok_or_else(|| {
                computation_error(
                    "placement",
                    &format!(
                        "cell ({row}, {col}) maps to index {position} of a {}-value line",
                        line.len()
                    ),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ExpandedGrid::from_cells(spec, cells)
}

/// Lay a line of `rows * cols` values out in row-major order
///
/// # Errors
///
/// Returns `Computation` if the line is shorter than the grid
pub fn place_flat<T: Clone>(spec: GridSpec, line: &[T]) -> Result<ExpandedGrid<T>> {
    let cols = spec.cols();
    place_with(spec, line, |row, col| row * cols + col)
}

/// Give column `c` the constant value `line[c]`
///
/// The line forms one row pattern that is repeated for every row.
///
/// # Errors
///
/// Returns `Computation` if the line is shorter than `cols`
pub fn place_per_column<T: Clone>(spec: GridSpec, line: &[T]) -> Result<ExpandedGrid<T>> {
    place_with(spec, line, |_, col| col)
}

/// Give row `r` the constant value `line[r]`
///
/// # Errors
///
/// Returns `Computation` if the line is shorter than `rows`
pub fn place_per_row<T: Clone>(spec: GridSpec, line: &[T]) -> Result<ExpandedGrid<T>> {
    place_with(spec, line, |row, _| row)
}

/// Take a `cols`-wide window per row, shifted one step further each row
///
/// Cell (`r`, `c`) takes `line[r + c]`, so values are constant along
/// anti-diagonals. The line needs `rows + cols - 1` values.
///
/// # Errors
///
/// Returns `Computation` if the line is shorter than the diagonal count
pub fn place_right_diagonal<T: Clone>(spec: GridSpec, line: &[T]) -> Result<ExpandedGrid<T>> {
    place_with(spec, line, |row, col| row + col)
}

/// Mirror image of [`place_right_diagonal`]
///
/// Each row's window is read from its tail, so cell (`r`, `c`) takes
/// `line[r + cols - 1 - c]` and values are constant along main diagonals.
///
/// # Errors
///
/// Returns `Computation` if the line is shorter than the diagonal count
pub fn place_left_diagonal<T: Clone>(spec: GridSpec, line: &[T]) -> Result<ExpandedGrid<T>> {
    let last_col = spec.cols() - 1;
    place_with(spec, line, |row, col| row + last_col - col)
}
