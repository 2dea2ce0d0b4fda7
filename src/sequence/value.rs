//! Feature values carried by seeds and grid cells
//!
//! A stimulus assigns one value per cell for each visual dimension. Shapes
//! and colors are text tags, sizes and orientations are numbers, and 2-D
//! sizes are pairs. `FeatureValue` covers all of them so that dimensions
//! loaded from JSON can flow through the same expansion code as typed seeds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single feature value assigned to a grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Whole number, e.g. an orientation in degrees
    Int(i64),
    /// Real number, e.g. a size or jittered orientation
    Float(f64),
    /// Text tag, e.g. a shape name or a color
    Text(String),
    /// Two-component value, e.g. a (width, height) size
    Pair(f64, f64),
}

impl FeatureValue {
    /// Numeric value if this is an integer or float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) | Self::Pair(..) => None,
        }
    }

    /// Short type name used in error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Pair(..) => "pair",
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<(f64, f64)> for FeatureValue {
    fn from((a, b): (f64, f64)) -> Self {
        Self::Pair(a, b)
    }
}

/// Values that can absorb an additive random offset
///
/// Returns `None` for values with no numeric interpretation, which callers
/// report as an invalid parameter.
pub trait Jitter: Sized {
    /// Return this value shifted by `offset`
    fn jittered(&self, offset: f64) -> Option<Self>;
}

impl Jitter for f64 {
    fn jittered(&self, offset: f64) -> Option<Self> {
        Some(self + offset)
    }
}

impl Jitter for f32 {
    fn jittered(&self, offset: f64) -> Option<Self> {
        num_traits::cast::<f64, Self>(offset).map(|offset| self + offset)
    }
}

impl Jitter for FeatureValue {
    fn jittered(&self, offset: f64) -> Option<Self> {
        self.as_f64().map(|value| Self::Float(value + offset))
    }
}
