//! Order and complexity measures over finished feature grids
//!
//! - LOCE: number of distinct per-cell fingerprints (joined feature values)
//! - LOC: distinct values summed over dimensions
//! - LOCI: selected dimensions that are not constant
//!
//! Hidden cells carry no shape, so they are left out of every count.

use std::fmt::Display;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::io::configuration::FINGERPRINT_SEPARATOR;
use crate::io::error::{Result, incompatible_dimensions, invalid_parameter};
use crate::sequence::buffer::group_indices;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Named per-cell values for one visual feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDimension<T> {
    /// Dimension name, e.g. `shape`
    pub name: String,
    /// One value per cell
    pub grid: ExpandedGrid<T>,
}

impl<T> FeatureDimension<T> {
    /// Pair a name with its grid
    pub fn new(name: impl Into<String>, grid: ExpandedGrid<T>) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// The four complexity measures of a stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexitySummary {
    /// Visible cells
    pub element_count: usize,
    /// Distinct feature values summed over dimensions
    pub loc: usize,
    /// Non-constant dimensions
    pub loci: usize,
    /// Distinct per-cell fingerprints
    pub loce: usize,
}

/// Complexity measures over a set of equally shaped dimensions
#[derive(Debug)]
pub struct ComplexityMetrics<'a, T> {
    selected: Vec<&'a FeatureDimension<T>>,
    spec: GridSpec,
    hidden: BitVec,
}

/// Cells left after removing the distinct in-range `hidden` indices
pub fn element_count(spec: GridSpec, hidden: &[usize]) -> usize {
    let mut mask = bitvec![0; spec.cell_count()];
    for &index in hidden {
        if index < mask.len() {
            mask.set(index, true);
        }
    }
    mask.count_zeros()
}

impl<'a, T: PartialEq + Display> ComplexityMetrics<'a, T> {
    /// Measure `dimensions`, restricted to `selected` names when given
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty dimension list, an unknown
    /// selected name or an out-of-range hidden index, and
    /// `IncompatibleDimensions` if the grids differ in shape
    pub fn new(
        dimensions: &'a [FeatureDimension<T>],
        selected: Option<&[String]>,
        hidden: &[usize],
    ) -> Result<Self> {
        let Some(first) = dimensions.first() else {
            return Err(invalid_parameter(
                "dimensions",
                &0,
                &"at least one dimension is required",
            ));
        };
        let spec = first.grid.spec();

        if let Some(mismatch) = dimensions.iter().find(|dim| dim.grid.spec() != spec) {
            return Err(incompatible_dimensions(
                "complexity metrics",
                mismatch.grid.rows(),
                mismatch.grid.cols(),
                &format!(
                    "dimension '{}' does not match the {}x{} grid of '{}'",
                    mismatch.name,
                    spec.rows(),
                    spec.cols(),
                    first.name
                ),
            ));
        }

        let selected = match selected {
            None => dimensions.iter().collect(),
            Some(names) => names
                .iter()
                .map(|name| {
                    dimensions
                        .iter()
                        .find(|dim| &dim.name == name)
                        .ok_or_else(|| {
                            invalid_parameter("selected", name, &"no dimension with this name")
                        })
                })
                .collect::<Result<Vec<_>>>()?,
        };

        let mut mask = bitvec![0; spec.cell_count()];
        for &index in hidden {
            if index >= mask.len() {
                return Err(invalid_parameter(
                    "hidden",
                    &index,
                    &format!("index out of range for {} cells", mask.len()),
                ));
            }
            mask.set(index, true);
        }

        Ok(Self {
            selected,
            spec,
            hidden: mask,
        })
    }

    /// Visible cells
    pub fn element_count(&self) -> usize {
        self.hidden.count_zeros()
    }

    /// Selected values of cell `index` joined with `FINGERPRINT_SEPARATOR`
    ///
    /// The text form keys swaps and logs. Values with equal text, such as
    /// `1` and `1.0`, share it, so counting uses the values themselves.
    pub fn fingerprint(&self, index: usize) -> String {
        self.selected
            .iter()
            .filter_map(|dim| dim.grid.get_index(index))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(FINGERPRINT_SEPARATOR)
    }

    /// Fingerprints of every cell, hidden ones included
    pub fn fingerprints(&self) -> Vec<String> {
        (0..self.spec.cell_count())
            .map(|index| self.fingerprint(index))
            .collect()
    }

    /// LOCE: distinct fingerprints among visible cells
    ///
    /// Cells are compared value by value, so two cells only share a
    /// fingerprint when every selected dimension holds equal values.
    pub fn distinct_fingerprint_count(&self) -> usize {
        let visible: Vec<Vec<&T>> = self
            .hidden
            .iter_zeros()
            .map(|index| {
                self.selected
                    .iter()
                    .filter_map(|dim| dim.grid.get_index(index))
                    .collect()
            })
            .collect();
        group_indices(&visible).len()
    }

    /// LOC: distinct visible values summed over selected dimensions
    pub fn total_feature_value_count(&self) -> usize {
        self.selected
            .iter()
            .map(|dim| self.distinct_values(dim))
            .sum()
    }

    /// LOCI: selected dimensions minus those holding a single value
    pub fn non_identical_dimension_count(&self) -> usize {
        let constant = self
            .selected
            .iter()
            .filter(|dim| self.distinct_values(dim) <= 1)
            .count();
        self.selected.len() - constant
    }

    /// All four measures
    pub fn summary(&self) -> ComplexitySummary {
        ComplexitySummary {
            element_count: self.element_count(),
            loc: self.total_feature_value_count(),
            loci: self.non_identical_dimension_count(),
            loce: self.distinct_fingerprint_count(),
        }
    }

    fn distinct_values(&self, dimension: &FeatureDimension<T>) -> usize {
        let visible: Vec<&T> = self
            .hidden
            .iter_zeros()
            .filter_map(|index| dimension.grid.get_index(index))
            .collect();
        group_indices(&visible).len()
    }
}
