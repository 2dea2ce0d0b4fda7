//! Mathematical utilities for gradients

/// RGB parsing and linear-light conversion
pub mod color;
/// Evenly spaced numeric, pair and color ranges
pub mod gradient;
