//! Tests for whole-block and per-cell tiling

#[cfg(test)]
mod tests {
    use stimgrid::PatternError;
    use stimgrid::io::configuration::MAX_GRID_DIMENSION;
    use stimgrid::spatial::grid::{ExpandedGrid, GridSpec};
    use stimgrid::spatial::tiles::{tile_to_size, tiled_element_grid, tiled_grid};

    fn block(rows: usize, cols: usize, cells: Vec<i32>) -> ExpandedGrid<i32> {
        ExpandedGrid::from_cells(GridSpec::new(rows, cols).unwrap(), cells).unwrap()
    }

    // Tests whole-block repetition in both directions
    // Verified by using division instead of modulo
    #[test]
    fn test_tiled_grid() {
        let tiled = tiled_grid(&block(1, 2, vec![1, 2]), 2, 2).unwrap();
        assert_eq!((tiled.rows(), tiled.cols()), (2, 4));
        assert_eq!(tiled.to_vec(), vec![1, 2, 1, 2, 1, 2, 1, 2]);
    }

    // Tests per-cell block expansion
    // Verified by using modulo instead of division
    #[test]
    fn test_tiled_element_grid() {
        let tiled = tiled_element_grid(&block(1, 2, vec![1, 2]), 2, 2).unwrap();
        assert_eq!(tiled.to_vec(), vec![1, 1, 2, 2, 1, 1, 2, 2]);

        let column = tiled_element_grid(&block(2, 1, vec![1, 2]), 1, 3).unwrap();
        assert_eq!(column.to_vec(), vec![1, 1, 1, 2, 2, 2]);
    }

    // Tests zero multipliers are rejected
    // Verified by removing validate_multiplier
    #[test]
    fn test_zero_multiplier() {
        let source = block(1, 1, vec![1]);
        assert!(matches!(
            tiled_grid(&source, 0, 1),
            Err(PatternError::InvalidParameter {
                parameter: "row_tiles",
                ..
            })
        ));
        assert!(tiled_element_grid(&source, 1, 0).is_err());
    }

    // Tests tiling to an exact size and the divisibility precondition
    // Verified by rounding the tile count up
    #[test]
    fn test_tile_to_size() {
        let source = block(2, 2, vec![1, 2, 3, 4]);
        let tiled = tile_to_size(&source, GridSpec::new(4, 6).unwrap()).unwrap();
        assert_eq!(tiled.get(3, 5), Some(&4));
        assert_eq!(tiled.get(2, 2), Some(&1));

        assert!(matches!(
            tile_to_size(&source, GridSpec::new(3, 4).unwrap()),
            Err(PatternError::IncompatibleDimensions { rows: 3, cols: 4, .. })
        ));
    }

    // Tests oversized and overflowing multipliers fail instead of panicking
    // Verified by multiplying without checked_mul
    #[test]
    fn test_oversized_multipliers() {
        let source = block(2, 2, vec![1, 2, 3, 4]);

        assert!(matches!(
            tiled_grid(&source, usize::MAX / 2 + 1, 1),
            Err(PatternError::IncompatibleDimensions { .. })
        ));
        assert!(matches!(
            tiled_element_grid(&source, 1, usize::MAX),
            Err(PatternError::IncompatibleDimensions { .. })
        ));
        assert!(matches!(
            tiled_grid(&source, MAX_GRID_DIMENSION, 1),
            Err(PatternError::IncompatibleDimensions { .. })
        ));
    }
}
