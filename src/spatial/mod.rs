//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Grid shapes and immutable expanded grids
//! - Padding grids outward by border rings
//! - Block tiling of small source grids

/// Border padding utilities
pub mod extension;
/// Grid shapes and expanded grids
pub mod grid;
/// Whole-block and per-cell tiling
pub mod tiles;

pub use grid::{ExpandedGrid, GridSpec};
