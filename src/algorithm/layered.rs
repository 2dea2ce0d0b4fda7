//! Concentric ring layouts
//!
//! The ring distance of a cell is `min(row, col, rows - 1 - row, cols - 1 - col)`.
//! Layered grids are grown from a central block outward, one border ring per
//! layer value.

use ndarray::Array2;

use crate::io::error::{Result, computation_error, incompatible_dimensions};
use crate::sequence::buffer::SequenceBuffer;
use crate::spatial::extension::wrap_ring;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Wrap `center` in one ring per layer value, first value innermost
///
/// Every layer adds two rows and two columns.
///
/// # Errors
///
/// Returns `IncompatibleDimensions` if the grown grid exceeds the grid size
/// limit
pub fn layered_grid<T: Clone>(center: &ExpandedGrid<T>, layers: &[T]) -> Result<ExpandedGrid<T>> {
    let growth = layers.len().checked_mul(2);
    let grown = growth.and_then(|extra| {
        Some((
            center.rows().checked_add(extra)?,
            center.cols().checked_add(extra)?,
        ))
    });
    let Some((rows, cols)) = grown else {
        return Err(incompatible_dimensions(
            "layered_grid",
            center.rows(),
            center.cols(),
            &format!("{} layers overflow the grid size", layers.len()),
        ));
    };
    GridSpec::new(rows, cols)?;

    let cells = layers
        .iter()
        .fold(center.as_array().clone(), |grid, value| {
            wrap_ring(&grid, value.clone())
        });
    ExpandedGrid::from_array(cells)
}

/// Seed value `d` fills every cell at ring distance `d` from the border
///
/// The seed is resized to the number of rings, `ceil(min(rows, cols) / 2)`,
/// so the outermost ring always takes the first seed value and the central
/// block the last.
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn layered_out_in<T: Clone>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let rings = spec.rows().min(spec.cols()).div_ceil(2);
    let values = seed.repeat_sequence_to_size(rings)?;

    let Some((innermost, outer)) = values.values().split_last() else {
        return Err(computation_error("layered_out_in", &"no ring values"));
    };

    let inset = 2 * (rings - 1);
    let center = Array2::from_elem(
        (spec.rows() - inset, spec.cols() - inset),
        innermost.clone(),
    );
    let layers: Vec<T> = outer.iter().rev().cloned().collect();

    layered_grid(&ExpandedGrid::from_array(center)?, &layers)
}
