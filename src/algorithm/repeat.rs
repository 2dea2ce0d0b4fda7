//! Repetition strategies: the seed is cycled to the needed length and placed
//! flat, per column, per row or along a diagonal

use crate::algorithm::placement::{
    place_flat, place_left_diagonal, place_per_column, place_per_row, place_right_diagonal,
};
use crate::io::error::Result;
use crate::sequence::buffer::SequenceBuffer;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Cycle the whole seed over every cell in row-major order
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn repeat_elements<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.cell_count())?;
    place_flat(spec, line.values())
}

/// Resize the seed to one row of `cols` values and repeat that row
///
/// A seed longer than `cols` is truncated.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn repeat_across_rows<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.cols())?;
    place_per_column(spec, line.values())
}

/// Resize the seed to `rows` values, one constant value per row
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn repeat_across_columns<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.rows())?;
    place_per_row(spec, line.values())
}

/// Diagonal bands running from the top-right towards the bottom-left
///
/// The seed is cycled over all `rows + cols - 1` diagonals and each row takes
/// a window shifted one step from the row above, so cell (`r`, `c`) holds
/// `seed[(r + c) % len]`.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn repeat_across_right_diagonal<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.diagonal_count())?;
    place_right_diagonal(spec, line.values())
}

/// Diagonal bands running from the top-left towards the bottom-right
///
/// Horizontal mirror of [`repeat_across_right_diagonal`]: cell (`r`, `c`)
/// holds `seed[(r + cols - 1 - c) % len]`, so the first row ends with the
/// first seed value.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn repeat_across_left_diagonal<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.diagonal_count())?;
    place_left_diagonal(spec, line.values())
}
