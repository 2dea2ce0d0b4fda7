//! Presentation-order swaps between grid positions
//!
//! Swaps never touch the feature grids themselves. A `SwapPlan` is a set of
//! disjoint index pairs that is turned into a permutation of cell indices and
//! applied to each grid when the stimulus is laid out.

use std::collections::HashMap;
use std::hash::Hash;

use bitvec::prelude::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;

use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::spatial::grid::ExpandedGrid;

/// Draws disjoint swap pairs over a fixed number of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSwapper {
    total_cells: usize,
    forbidden: BitVec,
}

/// Disjoint index pairs to exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pairs: Vec<(usize, usize)>,
    total_cells: usize,
}

impl ElementSwapper {
    /// Swapper over `total_cells` cells with nothing forbidden
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `total_cells` is zero
    pub fn new(total_cells: usize) -> Result<Self> {
        if total_cells == 0 {
            return Err(invalid_parameter(
                "total_cells",
                &total_cells,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            total_cells,
            forbidden: bitvec![0; total_cells],
        })
    }

    /// Exclude `indices` from every future pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an index is out of range
    pub fn with_forbidden(mut self, indices: &[usize]) -> Result<Self> {
        for &index in indices {
            if index >= self.total_cells {
                return Err(invalid_parameter(
                    "forbidden",
                    &index,
                    &format!("index out of range for {} cells", self.total_cells),
                ));
            }
            self.forbidden.set(index, true);
        }
        Ok(self)
    }

    /// Number of cells
    pub const fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// Indices that may still take part in a swap
    pub fn available(&self) -> Vec<usize> {
        self.forbidden.iter_zeros().collect()
    }

    /// Sample `n_pairs` disjoint pairs uniformly
    ///
    /// Both endpoints of a drawn pair leave the pool before the next draw.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `2 * n_pairs` exceeds the cell count and
    /// `SwapExhausted` if forbidden cells leave too few candidates
    pub fn swap_pairs<R: Rng + ?Sized>(&self, n_pairs: usize, rng: &mut R) -> Result<SwapPlan> {
        self.validate_pair_count(n_pairs)?;

        let mut pool = self.available();
        let mut pairs = Vec::with_capacity(n_pairs);
        while pairs.len() < n_pairs {
            if pool.len() < 2 {
                return Err(PatternError::SwapExhausted {
                    requested: n_pairs,
                    completed: pairs.len(),
                });
            }
            let first = pool.swap_remove(rng.random_range(0..pool.len()));
            let second = pool.swap_remove(rng.random_range(0..pool.len()));
            pairs.push(ordered(first, second));
        }

        Ok(SwapPlan {
            pairs,
            total_cells: self.total_cells,
        })
    }

    /// Sample `n_pairs` disjoint pairs whose fingerprints differ
    ///
    /// Each draw is uniform over the pairs of remaining cells that are still
    /// valid.
    ///
    /// `fingerprint` maps a cell index to the value that must differ between
    /// the two cells of a pair, typically the joined feature values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `2 * n_pairs` exceeds the cell count and
    /// `SwapExhausted` once every remaining candidate shares one fingerprint
    pub fn swap_distinct_pairs<K, F, R>(
        &self,
        n_pairs: usize,
        fingerprint: F,
        rng: &mut R,
    ) -> Result<SwapPlan>
    where
        K: Eq + Hash,
        F: Fn(usize) -> K,
        R: Rng + ?Sized,
    {
        self.validate_pair_count(n_pairs)?;

        let mut pool: Vec<(usize, K)> = self
            .forbidden
            .iter_zeros()
            .map(|index| (index, fingerprint(index)))
            .collect();
        let mut pairs = Vec::with_capacity(n_pairs);

        while pairs.len() < n_pairs {
            // A cell is drawn in proportion to its partner count, which makes
            // every valid pair equally likely
            let Ok(first_pick) = WeightedIndex::new(partner_counts(&pool)) else {
                return Err(PatternError::SwapExhausted {
                    requested: n_pairs,
                    completed: pairs.len(),
                });
            };

            let (first, key) = pool.swap_remove(first_pick.sample(rng));
            let partners: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, (_, other))| *other != key)
                .map(|(position, _)| position)
                .collect();
            let Some(&position) = partners.choose(rng) else {
                return Err(PatternError::SwapExhausted {
                    requested: n_pairs,
                    completed: pairs.len(),
                });
            };
            let (second, _) = pool.swap_remove(position);
            pairs.push(ordered(first, second));
        }

        Ok(SwapPlan {
            pairs,
            total_cells: self.total_cells,
        })
    }

    fn validate_pair_count(&self, n_pairs: usize) -> Result<()> {
        if n_pairs.saturating_mul(2) > self.total_cells {
            return Err(invalid_parameter(
                "n_pairs",
                &n_pairs,
                &format!("{} cells cannot hold that many disjoint pairs", self.total_cells),
            ));
        }
        Ok(())
    }
}

/// Number of cells in `pool` whose key differs from each cell's own
fn partner_counts<K: Eq + Hash>(pool: &[(usize, K)]) -> Vec<usize> {
    let mut group_sizes: HashMap<&K, usize> = HashMap::new();
    for (_, key) in pool {
        *group_sizes.entry(key).or_default() += 1;
    }
    pool.iter()
        .map(|(_, key)| pool.len() - group_sizes.get(key).copied().unwrap_or_default())
        .collect()
}

impl SwapPlan {
    /// Plan that moves nothing
    pub const fn empty(total_cells: usize) -> Self {
        Self {
            pairs: Vec::new(),
            total_cells,
        }
    }

    /// Pairs as `(smaller, larger)` indices, in draw order
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the plan moves nothing
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every index touched by the plan
    pub fn indices(&self) -> Vec<usize> {
        self.pairs.iter().flat_map(|&(a, b)| [a, b]).collect()
    }

    /// Combine two plans over the same cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the cell counts differ or the plans
    /// share an index
    pub fn merged(&self, other: &Self) -> Result<Self> {
        if self.total_cells != other.total_cells {
            return Err(invalid_parameter(
                "other",
                &other.total_cells,
                &format!("plans cover different cell counts ({})", self.total_cells),
            ));
        }

        let mut used = bitvec![0; self.total_cells];
        for index in self.indices().into_iter().chain(other.indices()) {
            if used.get(index).as_deref() != Some(&false) {
                return Err(invalid_parameter(
                    "other",
                    &index,
                    &"index appears in more than one pair",
                ));
            }
            used.set(index, true);
        }

        Ok(Self {
            pairs: self.pairs.iter().chain(&other.pairs).copied().collect(),
            total_cells: self.total_cells,
        })
    }

    /// Presentation order: position `k` shows the cell at `order[k]`
    pub fn permutation(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.total_cells).collect();
        for &(a, b) in &self.pairs {
            order.swap(a, b);
        }
        order
    }

    /// Reorder a grid according to this plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid size differs from the plan
    pub fn apply<T: Clone>(&self, grid: &ExpandedGrid<T>) -> Result<ExpandedGrid<T>> {
        grid.reordered(&self.permutation())
    }
}

const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
