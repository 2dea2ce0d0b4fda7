//! Mirror strategies built on palindromic lines
//!
//! A line of length `n` is built from the first `ceil(n / 2)` seed values
//! (cycling the seed if it is shorter). Odd lengths reflect around a true
//! center value that appears once; even lengths reflect the whole half.

use crate::algorithm::placement::{
    place_flat, place_left_diagonal, place_per_column, place_per_row, place_right_diagonal,
};
use crate::io::error::Result;
use crate::sequence::buffer::SequenceBuffer;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Palindromic line of exactly `length` values
///
/// # Errors
///
/// Returns `InvalidParameter` if `length` is zero
pub fn mirrored_line<T: Clone>(
    seed: &SequenceBuffer<T>,
    length: usize,
) -> Result<SequenceBuffer<T>> {
    let half = seed.repeat_sequence_to_size(length.div_ceil(2))?;
    Ok(half.mirrored(length % 2 == 1))
}

/// Extend the seed with its own reverse and cycle it over the grid
///
/// `[1, 2, 3]` becomes `[1, 2, 3, 2, 1]` before being repeated or truncated
/// to `rows * cols` values.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn mirror_elements<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = seed
        .mirrored(true)
        .repeat_sequence_to_size(spec.cell_count())?;
    place_flat(spec, line.values())
}

/// One value per row, symmetric about the horizontal midline
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn mirror_across_rows<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = mirrored_line(seed, spec.rows())?;
    place_per_row(spec, line.values())
}

/// One value per column, symmetric about the vertical midline
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn mirror_across_columns<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let line = mirrored_line(seed, spec.cols())?;
    place_per_column(spec, line.values())
}

/// Anti-diagonal bands symmetric under a half turn of the grid
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn mirror_across_right_diagonal<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let shifter = mirrored_line(seed, spec.diagonal_count())?;
    place_right_diagonal(spec, shifter.values())
}

/// Main-diagonal bands, the horizontal mirror of the right-diagonal variant
///
/// Seed `[1, 2, 3]` on a 4x5 grid gives
/// `[1,1,3,2,1, 3,1,1,3,2, 2,3,1,1,3, 1,2,3,1,1]`.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn mirror_across_left_diagonal<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let shifter = mirrored_line(seed, spec.diagonal_count())?;
    place_left_diagonal(spec, shifter.values())
}
