//! Seed-driven tiling strategies: horizontal subgroups and checkerboards

use crate::io::configuration::CHECKERBOARD_MAX_VALUES;
use crate::io::error::{PatternError, Result, incompatible_dimensions};
use crate::sequence::buffer::{SequenceBuffer, group_indices};
use crate::spatial::grid::{ExpandedGrid, GridSpec};
use crate::spatial::tiles::{tile_to_size, tiled_element_grid};

/// Split the grid into one equal horizontal band per seed value
///
/// # Errors
///
/// Returns `IncompatibleDimensions` if `rows` is not divisible by the seed
/// length
pub fn subgroup<T: Clone>(seed: &SequenceBuffer<T>, spec: GridSpec) -> Result<ExpandedGrid<T>> {
    let groups = seed.len();
    if spec.rows() % groups != 0 {
        return Err(incompatible_dimensions(
            "subgroup",
            spec.rows(),
            spec.cols(),
            &format!("rows must be divisible by the seed length {groups}"),
        ));
    }

    let column = ExpandedGrid::from_cells(GridSpec::new(groups, 1)?, seed.values().to_vec())?;
    tiled_element_grid(&column, spec.rows() / groups, spec.cols())
}

/// Alternate the distinct seed values in a 2x2 block tiled over the grid
///
/// Two values give a classic checkerboard `a b / b a`; a third value takes the
/// lower-left corner of every block, `a b / c a`.
///
/// # Errors
///
/// Returns `SeedTooShort` for fewer than two distinct values and
/// `IncompatibleDimensions` for odd grid dimensions or more than
/// `CHECKERBOARD_MAX_VALUES` distinct values
pub fn checkerboard<T: Clone + PartialEq>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
) -> Result<ExpandedGrid<T>> {
    let distinct: Vec<&T> = group_indices(seed.values())
        .iter()
        .filter_map(|group| group.first().and_then(|&index| seed.values().get(index)))
        .collect();

    let (first, second) = match distinct.as_slice() {
        [first, second, ..] => (*first, *second),
        _ => {
            return Err(PatternError::SeedTooShort {
                operation: "checkerboard",
                required: 2,
                actual: distinct.len(),
            });
        }
    };
    if distinct.len() > CHECKERBOARD_MAX_VALUES {
        return Err(incompatible_dimensions(
            "checkerboard",
            spec.rows(),
            spec.cols(),
            &format!(
                "at most {CHECKERBOARD_MAX_VALUES} distinct values are supported, got {}",
                distinct.len()
            ),
        ));
    }
    if spec.rows() % 2 != 0 || spec.cols() % 2 != 0 {
        return Err(incompatible_dimensions(
            "checkerboard",
            spec.rows(),
            spec.cols(),
            &"rows and cols must both be even",
        ));
    }

    let third = distinct.get(2).copied().unwrap_or(second);
    let block = ExpandedGrid::from_cells(
        GridSpec::new(2, 2)?,
        vec![first.clone(), second.clone(), third.clone(), first.clone()],
    )?;
    tile_to_size(&block, spec)
}
