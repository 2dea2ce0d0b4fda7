//! Expansion constants and the serde model of stimulus configuration files

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::expander::{GradientDirection, Strategy};
use crate::io::error::Result;
use crate::io::export::read_json;
use crate::sequence::value::FeatureValue;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Largest number of distinct values a checkerboard can alternate
pub const CHECKERBOARD_MAX_VALUES: usize = 3;

/// Separator between dimension values in a per-cell fingerprint
pub const FINGERPRINT_SEPARATOR: &str = "|";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Consecutive repetitions of each seed value before expansion
pub const DEFAULT_REPEAT_EACH: usize = 1;

// Batch file settings
/// Extension of stimulus configuration files
pub const CONFIG_EXTENSION: &str = "json";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stimulus";

/// Complete description of one stimulus grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StimulusConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Visual feature dimensions, expanded independently
    pub dimensions: Vec<DimensionConfig>,
    /// Number of uniformly chosen position swaps
    #[serde(default)]
    pub swaps: usize,
    /// Number of position swaps between cells with different fingerprints
    #[serde(default)]
    pub distinct_swaps: usize,
    /// Row-major indices of cells rendered without a shape
    #[serde(default)]
    pub hidden: Vec<usize>,
    /// Dimensions counted by the complexity metrics, all when absent
    #[serde(default)]
    pub metric_dimensions: Option<Vec<String>>,
}

impl StimulusConfig {
    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `Serialization`
    /// if it is not a valid configuration
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// Source of the values for one feature dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionConfig {
    /// Seed sequence expanded under a strategy
    Pattern {
        /// Dimension name, e.g. `shape` or `color`
        name: String,
        /// Seed values
        seed: Vec<FeatureValue>,
        /// Expansion strategy
        strategy: Strategy,
        /// Consecutive repetitions of each seed value before expansion
        #[serde(default = "default_repeat_each")]
        repeat_each: usize,
        /// Gaussian jitter added to numeric seed values
        #[serde(default)]
        jitter: Option<JitterConfig>,
        /// Shuffle the seed before expansion
        #[serde(default)]
        shuffle: bool,
    },
    /// Interpolation between two endpoints
    Gradient {
        /// Dimension name
        name: String,
        /// First value
        start: FeatureValue,
        /// Last value
        end: FeatureValue,
        /// How the interpolated line is laid over the grid
        direction: GradientDirection,
    },
}

impl DimensionConfig {
    /// Dimension name
    pub fn name(&self) -> &str {
        match self {
            Self::Pattern { name, .. } | Self::Gradient { name, .. } => name,
        }
    }
}

/// Parameters of a normal distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    /// Mean offset
    #[serde(default)]
    pub mu: f64,
    /// Standard deviation
    pub sigma: f64,
}

const fn default_repeat_each() -> usize {
    DEFAULT_REPEAT_EACH
}
