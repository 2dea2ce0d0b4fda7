//! Grid dimensions and the immutable row-major grids produced by expansion
//!
//! An `ExpandedGrid` always holds exactly `rows * cols` cells in standard
//! (row-major) layout, so `iter()` yields cells in the order the rendering
//! layer pairs them with positions.

use bitvec::prelude::*;
use ndarray::{Array2, ArrayView1};
use serde::Serialize;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, incompatible_dimensions, invalid_parameter};

/// Target grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
}

impl GridSpec {
    /// Create a grid shape
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimensions` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(incompatible_dimensions(
                "grid spec",
                rows,
                cols,
                &"rows and cols must be at least 1",
            ));
        }
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(incompatible_dimensions(
                "grid spec",
                rows,
                cols,
                &format!("dimensions are limited to {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of diagonals running across the grid (`rows + cols - 1`)
    pub const fn diagonal_count(&self) -> usize {
        self.rows + self.cols - 1
    }
}

/// Grid of per-cell feature values in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedGrid<T> {
    cells: Array2<T>,
}

impl<T> ExpandedGrid<T> {
    /// Build a grid from row-major cells
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimensions` if `cells.len() != rows * cols`
    pub fn from_cells(spec: GridSpec, cells: Vec<T>) -> Result<Self> {
        let count = cells.len();
        let cells = Array2::from_shape_vec((spec.rows(), spec.cols()), cells).map_err(|e| {
            incompatible_dimensions(
                "grid construction",
                spec.rows(),
                spec.cols(),
                &format!("expected {} cells, got {count}: {e}", spec.cell_count()),
            )
        })?;
        Ok(Self { cells })
    }

    /// Wrap an array that is known to be non-empty
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimensions` if the array has a zero dimension
    pub fn from_array(cells: Array2<T>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        GridSpec::new(rows, cols)?;
        Ok(Self { cells })
    }

    /// Shape of this grid
    pub fn spec(&self) -> GridSpec {
        let (rows, cols) = self.cells.dim();
        GridSpec { rows, cols }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get((row, col))
    }

    /// Cell at row-major `index`
    pub fn get_index(&self, index: usize) -> Option<&T> {
        let cols = self.cols();
        self.cells.get((index / cols, index % cols))
    }

    /// One row of the grid
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, T>> {
        (row < self.rows()).then(|| self.cells.row(row))
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Underlying two-dimensional array
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }

    /// Consume the grid and return its row-major cells
    pub fn into_vec(self) -> Vec<T> {
        self.cells.into_iter().collect()
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U, F>(&self, f: F) -> ExpandedGrid<U>
    where
        F: FnMut(&T) -> U,
    {
        ExpandedGrid {
            cells: self.cells.map(f),
        }
    }
}

impl<T: Clone> ExpandedGrid<T> {
    /// Row-major cells as an owned vector
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().cloned().collect()
    }

    /// Rearrange cells into a presentation order
    ///
    /// Position `k` of the result holds the cell at `order[k]` of this grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `order` is not a permutation of the
    /// cell indices
    pub fn reordered(&self, order: &[usize]) -> Result<Self> {
        if order.len() != self.len() {
            return Err(invalid_parameter(
                "order",
                &order.len(),
                &format!("expected a permutation of {} indices", self.len()),
            ));
        }

        let mut seen = bitvec![0; order.len()];
        let mut cells = Vec::with_capacity(order.len());
        for &index in order {
            if seen.get(index).as_deref() != Some(&false) {
                return Err(invalid_parameter(
                    "order",
                    &index,
                    &"index is out of range or repeated",
                ));
            }
            seen.set(index, true);
            if let Some(value) = self.get_index(index) {
                cells.push(value.clone());
            }
        }

        Self::from_cells(self.spec(), cells)
    }
}
