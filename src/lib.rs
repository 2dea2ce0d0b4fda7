//! Pattern expansion engine for grid-based visual stimuli
//!
//! Short seed sequences of feature values (shapes, colors, sizes,
//! orientations) are expanded into one value per grid cell under repeat,
//! mirror, tiling, layered and gradient rules. Swap plans reorder the cells
//! for presentation and complexity metrics summarise the result.

#![forbid(unsafe_code)]

/// Expansion strategies, strategy dispatch and swap planning
pub mod algorithm;
/// Complexity measures over finished grids
pub mod analysis;
/// Configuration, errors, persistence and the command-line interface
pub mod io;
/// Colors and gradient interpolation
pub mod math;
/// Seed sequences and feature values
pub mod sequence;
/// Grid shapes, padding and block tiling
pub mod spatial;

pub use io::error::{PatternError, Result};
