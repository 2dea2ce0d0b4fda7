/// Strategy enum, dispatch and gradient placement
pub mod expander;
/// Concentric ring layouts
pub mod layered;
/// Mirror strategies
pub mod mirror;
/// Line-to-grid placement shared by the strategies
pub mod placement;
/// Repeat strategies
pub mod repeat;
/// Disjoint swap pairs and presentation permutations
pub mod swap;
/// Subgroup and checkerboard strategies
pub mod tiling;
