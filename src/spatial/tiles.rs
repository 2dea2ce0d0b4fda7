//! Block replication of small source grids
//!
//! A source grid is either repeated whole (`tiled_grid`) or each of its cells
//! is blown up into a rectangular block (`tiled_element_grid`). Row and column
//! multipliers are independent.

use crate::io::error::{Result, incompatible_dimensions, invalid_parameter};
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Repeat the whole source block `row_tiles` times down and `col_tiles` across
///
/// # Errors
///
/// Returns `InvalidParameter` if a multiplier is zero, or
/// `IncompatibleDimensions` if the result exceeds the grid size limit
pub fn tiled_grid<T: Clone>(
    source: &ExpandedGrid<T>,
    row_tiles: usize,
    col_tiles: usize,
) -> Result<ExpandedGrid<T>> {
    validate_multiplier("row_tiles", row_tiles)?;
    validate_multiplier("col_tiles", col_tiles)?;

    let block = source.as_array();
    let (rows, cols) = block.dim();
    let spec = scaled_spec("tiled_grid", rows, cols, row_tiles, col_tiles)?;

    let cells = cell_positions(spec)
        .filter_map(|(row, col)| block.get((row % rows, col % cols)).cloned())
        .collect();
    ExpandedGrid::from_cells(spec, cells)
}

/// Replace every source cell with a `block_rows` x `block_cols` block
///
/// # Errors
///
/// Returns `InvalidParameter` if a block size is zero, or
/// `IncompatibleDimensions` if the result exceeds the grid size limit
pub fn tiled_element_grid<T: Clone>(
    source: &ExpandedGrid<T>,
    block_rows: usize,
    block_cols: usize,
) -> Result<ExpandedGrid<T>> {
    validate_multiplier("block_rows", block_rows)?;
    validate_multiplier("block_cols", block_cols)?;

    let block = source.as_array();
    let (rows, cols) = block.dim();
    let spec = scaled_spec("tiled_element_grid", rows, cols, block_rows, block_cols)?;

    let cells = cell_positions(spec)
        .filter_map(|(row, col)| block.get((row / block_rows, col / block_cols)).cloned())
        .collect();
    ExpandedGrid::from_cells(spec, cells)
}

/// Tile the source block to exactly fill `spec`
///
/// # Errors
///
/// Returns `IncompatibleDimensions` if the target is not a whole multiple of
/// the source in both directions
pub fn tile_to_size<T: Clone>(source: &ExpandedGrid<T>, spec: GridSpec) -> Result<ExpandedGrid<T>> {
    if spec.rows() % source.rows() != 0 || spec.cols() % source.cols() != 0 {
        return Err(incompatible_dimensions(
            "tile_to_size",
            spec.rows(),
            spec.cols(),
            &format!(
                "not a whole multiple of the {}x{} source block",
                source.rows(),
                source.cols()
            ),
        ));
    }
    tiled_grid(
        source,
        spec.rows() / source.rows(),
        spec.cols() / source.cols(),
    )
}

/// Shape of a `rows` x `cols` block scaled by the given factors
fn scaled_spec(
    operation: &'static str,
    rows: usize,
    cols: usize,
    row_factor: usize,
    col_factor: usize,
) -> Result<GridSpec> {
    match (rows.checked_mul(row_factor), cols.checked_mul(col_factor)) {
        (Some(scaled_rows), Some(scaled_cols)) => GridSpec::new(scaled_rows, scaled_cols),
        _ => Err(incompatible_dimensions(
            operation,
            rows,
            cols,
            &format!("scaling by {row_factor}x{col_factor} overflows the grid size"),
        )),
    }
}

fn cell_positions(spec: GridSpec) -> impl Iterator<Item = (usize, usize)> {
    (0..spec.rows()).flat_map(move |row| (0..spec.cols()).map(move |col| (row, col)))
}

fn validate_multiplier(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"tile multipliers must be positive",
        ));
    }
    Ok(())
}
