//! Strategy dispatch from a seed and grid shape to a finished grid
//!
//! Strategies are a closed enum mapped onto plain functions. Deterministic
//! strategies share one signature; the random pattern is the only one that
//! draws from the injected generator.

use std::fmt;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithm::layered::layered_out_in;
use crate::algorithm::mirror::{
    mirror_across_columns, mirror_across_left_diagonal, mirror_across_right_diagonal,
    mirror_across_rows, mirror_elements,
};
use crate::algorithm::placement::{
    place_flat, place_left_diagonal, place_per_column, place_per_row, place_right_diagonal,
};
use crate::algorithm::repeat::{
    repeat_across_columns, repeat_across_left_diagonal, repeat_across_right_diagonal,
    repeat_across_rows, repeat_elements,
};
use crate::algorithm::tiling::{checkerboard, subgroup};
use crate::io::configuration::DEFAULT_REPEAT_EACH;
use crate::io::error::{Result, invalid_parameter};
use crate::math::gradient;
use crate::sequence::buffer::SequenceBuffer;
use crate::sequence::value::FeatureValue;
use crate::spatial::grid::{ExpandedGrid, GridSpec};

/// Named rule for turning a seed into a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Seed cycled over all cells in row-major order
    RepeatElements,
    /// Seed forms one row, repeated down the grid
    RepeatAcrossRows,
    /// One seed value per row
    RepeatAcrossColumns,
    /// Constant anti-diagonals
    RepeatAcrossRightDiagonal,
    /// Constant main diagonals
    RepeatAcrossLeftDiagonal,
    /// Palindromic seed cycled over all cells
    MirrorElements,
    /// Rows symmetric about the horizontal midline
    MirrorAcrossRows,
    /// Columns symmetric about the vertical midline
    MirrorAcrossColumns,
    /// Palindromic anti-diagonals
    MirrorAcrossRightDiagonal,
    /// Palindromic main diagonals
    MirrorAcrossLeftDiagonal,
    /// Concentric rings, first seed value outermost
    LayeredOutIn,
    /// One horizontal band per seed value
    Subgroup,
    /// Alternating 2x2 blocks of up to three values
    Checkerboard,
    /// Seed cycled over all cells, then shuffled
    RandomPattern,
}

type StrategyFn<T> = fn(&SequenceBuffer<T>, GridSpec) -> Result<ExpandedGrid<T>>;

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Self; 14] = [
        Self::RepeatElements,
        Self::RepeatAcrossRows,
        Self::RepeatAcrossColumns,
        Self::RepeatAcrossRightDiagonal,
        Self::RepeatAcrossLeftDiagonal,
        Self::MirrorElements,
        Self::MirrorAcrossRows,
        Self::MirrorAcrossColumns,
        Self::MirrorAcrossRightDiagonal,
        Self::MirrorAcrossLeftDiagonal,
        Self::LayeredOutIn,
        Self::Subgroup,
        Self::Checkerboard,
        Self::RandomPattern,
    ];

    /// Snake-case name, as used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            Self::RepeatElements => "repeat_elements",
            Self::RepeatAcrossRows => "repeat_across_rows",
            Self::RepeatAcrossColumns => "repeat_across_columns",
            Self::RepeatAcrossRightDiagonal => "repeat_across_right_diagonal",
            Self::RepeatAcrossLeftDiagonal => "repeat_across_left_diagonal",
            Self::MirrorElements => "mirror_elements",
            Self::MirrorAcrossRows => "mirror_across_rows",
            Self::MirrorAcrossColumns => "mirror_across_columns",
            Self::MirrorAcrossRightDiagonal => "mirror_across_right_diagonal",
            Self::MirrorAcrossLeftDiagonal => "mirror_across_left_diagonal",
            Self::LayeredOutIn => "layered_out_in",
            Self::Subgroup => "subgroup",
            Self::Checkerboard => "checkerboard",
            Self::RandomPattern => "random_pattern",
        }
    }

    /// Whether the strategy consumes randomness
    pub const fn is_stochastic(self) -> bool {
        matches!(self, Self::RandomPattern)
    }

    fn deterministic<T: Clone + PartialEq>(self) -> Option<StrategyFn<T>> {
        let run: StrategyFn<T> = match self {
            Self::RepeatElements => repeat_elements,
            Self::RepeatAcrossRows => repeat_across_rows,
            Self::RepeatAcrossColumns => repeat_across_columns,
            Self::RepeatAcrossRightDiagonal => repeat_across_right_diagonal,
            Self::RepeatAcrossLeftDiagonal => repeat_across_left_diagonal,
            Self::MirrorElements => mirror_elements,
            Self::MirrorAcrossRows => mirror_across_rows,
            Self::MirrorAcrossColumns => mirror_across_columns,
            Self::MirrorAcrossRightDiagonal => mirror_across_right_diagonal,
            Self::MirrorAcrossLeftDiagonal => mirror_across_left_diagonal,
            Self::LayeredOutIn => layered_out_in,
            Self::Subgroup => subgroup,
            Self::Checkerboard => checkerboard,
            Self::RandomPattern => return None,
        };
        Some(run)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout of an interpolated gradient line over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    /// One step per cell in row-major order
    Elements,
    /// One step per row
    Rows,
    /// One step per column
    Columns,
    /// One step per anti-diagonal
    RightDiagonal,
    /// One step per main diagonal
    LeftDiagonal,
}

impl GradientDirection {
    /// Number of gradient steps needed to cover `spec`
    pub const fn line_length(self, spec: GridSpec) -> usize {
        match self {
            Self::Elements => spec.cell_count(),
            Self::Rows => spec.rows(),
            Self::Columns => spec.cols(),
            Self::RightDiagonal | Self::LeftDiagonal => spec.diagonal_count(),
        }
    }
}

/// Seed cycled over every cell, then uniformly shuffled
///
/// # Errors
///
/// Propagates resize failures (none for a valid seed and grid)
pub fn random_pattern<T: Clone, R: Rng + ?Sized>(
    seed: &SequenceBuffer<T>,
    spec: GridSpec,
    rng: &mut R,
) -> Result<ExpandedGrid<T>> {
    let line = seed.repeat_sequence_to_size(spec.cell_count())?.shuffle(rng);
    place_flat(spec, line.values())
}

/// Interpolate from `start` to `end` and lay the line out along `direction`
///
/// # Errors
///
/// Returns `InvalidParameter` if the endpoints are incompatible or the
/// direction covers fewer than two steps (e.g. rows of a one-row grid)
pub fn gradient_grid(
    start: &FeatureValue,
    end: &FeatureValue,
    direction: GradientDirection,
    spec: GridSpec,
) -> Result<ExpandedGrid<FeatureValue>> {
    let line = gradient::make(start, end, direction.line_length(spec))?;
    match direction {
        GradientDirection::Elements => place_flat(spec, &line),
        GradientDirection::Rows => place_per_row(spec, &line),
        GradientDirection::Columns => place_per_column(spec, &line),
        GradientDirection::RightDiagonal => place_right_diagonal(spec, &line),
        GradientDirection::LeftDiagonal => place_left_diagonal(spec, &line),
    }
}

/// Expands seeds over a fixed grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExpander {
    spec: GridSpec,
    repeat_each: usize,
}

impl GridExpander {
    /// Create an expander for `spec`
    pub const fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            repeat_each: DEFAULT_REPEAT_EACH,
        }
    }

    /// Repeat every seed value `repeat_each` times before expansion
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `repeat_each` is zero
    pub fn with_repeat_each(self, repeat_each: usize) -> Result<Self> {
        if repeat_each == 0 {
            return Err(invalid_parameter(
                "repeat_each",
                &repeat_each,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            repeat_each,
            ..self
        })
    }

    /// Target grid shape
    pub const fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Expand `seed` under `strategy`
    ///
    /// The generator is only consumed by stochastic strategies.
    ///
    /// # Errors
    ///
    /// Returns the strategy's precondition failure, typically
    /// `IncompatibleDimensions` or `SeedTooShort`
    pub fn expand<T, R>(
        &self,
        strategy: Strategy,
        seed: &SequenceBuffer<T>,
        rng: &mut R,
    ) -> Result<ExpandedGrid<T>>
    where
        T: Clone + PartialEq,
        R: Rng + ?Sized,
    {
        let seed = if self.repeat_each > 1 {
            seed.repeat_elements(self.repeat_each, None)?
        } else {
            seed.clone()
        };

        debug!(
            "Expanding {} seed values with {strategy} over {}x{}",
            seed.len(),
            self.spec.rows(),
            self.spec.cols()
        );

        match strategy.deterministic() {
            Some(run) => run(&seed, self.spec),
            None => random_pattern(&seed, self.spec, rng),
        }
    }

    /// Gradient between two endpoints over this grid
    ///
    /// # Errors
    ///
    /// See [`gradient_grid`]
    pub fn gradient(
        &self,
        start: &FeatureValue,
        end: &FeatureValue,
        direction: GradientDirection,
    ) -> Result<ExpandedGrid<FeatureValue>> {
        debug!(
            "Interpolating {start} to {end} along {direction:?} over {}x{}",
            self.spec.rows(),
            self.spec.cols()
        );
        gradient_grid(start, end, direction, self.spec)
    }
}
