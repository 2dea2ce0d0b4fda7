//! Stimulus documents: the expanded grids, presentation order and metrics of
//! one stimulus, persisted as JSON
//!
//! ```json
//! {
//!   "display": { "rows": 2, "cols": 2, "seed": 42, "metrics": { ... } },
//!   "elements": { "shape": ["a", "b", "a", "b"], "order": [0, 1, 2, 3], "hidden": [false, false, false, false] }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::algorithm::expander::GridExpander;
use crate::algorithm::swap::{ElementSwapper, SwapPlan};
use crate::analysis::complexity::{ComplexityMetrics, ComplexitySummary, FeatureDimension};
use crate::io::configuration::{DimensionConfig, StimulusConfig};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::sequence::buffer::SequenceBuffer;
use crate::sequence::value::FeatureValue;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

const RESERVED_NAMES: [&str; 2] = ["order", "hidden"];

/// Grid shape, generator seed and metrics of a stimulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Seed of the generator that produced the stimulus
    pub seed: u64,
    /// Complexity measures
    pub metrics: ComplexitySummary,
}

/// Per-cell arrays of a stimulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTable {
    /// Presentation order: position `k` shows cell `order[k]`
    pub order: Vec<usize>,
    /// Cells rendered without a shape
    pub hidden: Vec<bool>,
    /// Row-major values of every feature dimension
    #[serde(flatten)]
    pub features: BTreeMap<String, Vec<FeatureValue>>,
}

/// A generated stimulus ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusDocument {
    /// Grid-level information
    pub display: DisplayInfo,
    /// Cell-level information
    pub elements: ElementTable,
}

impl StimulusDocument {
    /// Expand every dimension, plan swaps and measure the result
    ///
    /// Jitter, shuffles, random patterns and swaps all draw from one
    /// generator seeded with `seed`, in configuration order.
    ///
    /// # Errors
    ///
    /// Returns the first expansion, swap or metric failure, or
    /// `InvalidParameter` for missing, duplicate or reserved dimension names
    pub fn generate(config: &StimulusConfig, seed: u64) -> Result<Self> {
        let spec = GridSpec::new(config.rows, config.cols)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let expander = GridExpander::new(spec);

        if config.dimensions.is_empty() {
            return Err(invalid_parameter(
                "dimensions",
                &0,
                &"a stimulus needs at least one dimension",
            ));
        }

        let mut dimensions: Vec<FeatureDimension<FeatureValue>> =
            Vec::with_capacity(config.dimensions.len());
        for dimension in &config.dimensions {
            let name = dimension.name();
            if RESERVED_NAMES.contains(&name) || dimensions.iter().any(|dim| dim.name == name) {
                return Err(invalid_parameter(
                    "name",
                    &name,
                    &"dimension names must be unique and not 'order' or 'hidden'",
                ));
            }

            let grid = match dimension {
                DimensionConfig::Pattern {
                    seed: values,
                    strategy,
                    repeat_each,
                    jitter,
                    shuffle,
                    ..
                } => {
                    let mut buffer = SequenceBuffer::new(values.clone())?;
                    if let Some(jitter) = jitter {
                        buffer = buffer.add_gaussian_jitter(jitter.mu, jitter.sigma, &mut rng)?;
                    }
                    if *shuffle {
                        buffer = buffer.shuffle(&mut rng);
                    }
                    expander
                        .with_repeat_each(*repeat_each)?
                        .expand(*strategy, &buffer, &mut rng)?
                }
                DimensionConfig::Gradient {
                    start,
                    end,
                    direction,
                    ..
                } => expander.gradient(start, end, *direction)?,
            };
            dimensions.push(FeatureDimension::new(name, grid));
        }

        let swapper = ElementSwapper::new(spec.cell_count())?.with_forbidden(&config.hidden)?;
        let plan = plan_swaps(&swapper, &dimensions, config, &mut rng)?;

        let metrics = ComplexityMetrics::new(
            &dimensions,
            config.metric_dimensions.as_deref(),
            &config.hidden,
        )?
        .summary();

        debug!(
            "Generated {}x{} stimulus with {} dimensions and {} swaps",
            spec.rows(),
            spec.cols(),
            dimensions.len(),
            plan.len()
        );

        let mut hidden = vec![false; spec.cell_count()];
        for &index in &config.hidden {
            if let Some(cell) = hidden.get_mut(index) {
                *cell = true;
            }
        }

        Ok(Self {
            display: DisplayInfo {
                rows: spec.rows(),
                cols: spec.cols(),
                seed,
                metrics,
            },
            elements: ElementTable {
                order: plan.permutation(),
                hidden,
                features: dimensions
                    .into_iter()
                    .map(|dim| (dim.name, dim.grid.into_vec()))
                    .collect(),
            },
        })
    }

    /// Stored values of one dimension as a grid, in cell order
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unknown name and
    /// `IncompatibleDimensions` if the stored array does not fit the grid
    pub fn dimension(&self, name: &str) -> Result<ExpandedGrid<FeatureValue>> {
        let values = self
            .elements
            .features
            .get(name)
            .ok_or_else(|| invalid_parameter("name", &name, &"no dimension with this name"))?;
        let spec = GridSpec::new(self.display.rows, self.display.cols)?;
        ExpandedGrid::from_cells(spec, values.clone())
    }

    /// Values of one dimension in presentation order
    ///
    /// # Errors
    ///
    /// As [`Self::dimension`], plus `InvalidParameter` if the stored order is
    /// not a permutation
    pub fn presented(&self, name: &str) -> Result<ExpandedGrid<FeatureValue>> {
        self.dimension(name)?.reordered(&self.elements.order)
    }

    /// Write the document as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` or `FileSystem` on failure
    pub fn write_json(&self, path: &Path) -> Result<()> {
        write_json(self, path)
    }

    /// Read a document written by [`Self::write_json`]
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `Serialization`
    /// if it is not a valid document
    pub fn read_json(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

fn plan_swaps(
    swapper: &ElementSwapper,
    dimensions: &[FeatureDimension<FeatureValue>],
    config: &StimulusConfig,
    rng: &mut StdRng,
) -> Result<SwapPlan> {
    let plain = if config.swaps > 0 {
        swapper.swap_pairs(config.swaps, rng)?
    } else {
        SwapPlan::empty(swapper.total_cells())
    };
    if config.distinct_swaps == 0 {
        return Ok(plain);
    }

    let fingerprints = ComplexityMetrics::new(dimensions, None, &[])?.fingerprints();
    let distinct = swapper
        .clone()
        .with_forbidden(&plain.indices())?
        .swap_distinct_pairs(
            config.distinct_swaps,
            |index| fingerprints.get(index).cloned(),
            rng,
        )?;
    plain.merged(&distinct)
}

/// Serialize `value` to `path` as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` or `FileSystem` on failure
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| {
        PatternError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, text).map_err(|source| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

/// Deserialize a JSON file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `Serialization` if
/// the content does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PatternError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}
