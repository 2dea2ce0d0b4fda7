//! Persistent seed sequences with repeat, truncate, shuffle and jitter transforms
//!
//! Every transform borrows the buffer and returns a new one, so the same seed
//! can feed several feature dimensions without aliasing. Stochastic transforms
//! take the random generator as an explicit argument.

use bitvec::prelude::*;
use log::warn;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand_distr::{Distribution, Normal};

use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::sequence::value::Jitter;

/// Non-empty ordered sequence of feature values
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceBuffer<T> {
    values: Vec<T>,
}

/// Result of [`SequenceBuffer::switch_values`]
///
/// Switching stops early when fewer than two value groups still have
/// unswapped elements, so `completed` may be below the requested count.
#[derive(Debug, Clone, PartialEq)]
pub struct Switched<T> {
    /// Buffer with the completed swaps applied
    pub buffer: SequenceBuffer<T>,
    /// Number of swaps actually performed
    pub completed: usize,
}

impl<T: Clone> SequenceBuffer<T> {
    /// Create a buffer from a literal seed
    ///
    /// # Errors
    ///
    /// Returns `SeedTooShort` if `values` is empty
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(PatternError::SeedTooShort {
                operation: "sequence buffer",
                required: 1,
                actual: 0,
            });
        }
        Ok(Self { values })
    }

    /// Borrow the values in order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the buffer and return its values
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Number of values in the buffer
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Repeat each element `n` times consecutively
    ///
    /// `[a, b]` with `n = 2` becomes `[a, a, b, b]`. The result is truncated
    /// to `max_len` when given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` or `max_len` is zero
    pub fn repeat_elements(&self, n: usize, max_len: Option<usize>) -> Result<Self> {
        validate_repeat(n, max_len)?;
        let values = self
            .values
            .iter()
            .flat_map(|value| std::iter::repeat_n(value, n))
            .take(max_len.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(Self { values })
    }

    /// Concatenate the whole sequence `n` times
    ///
    /// `[a, b]` with `n = 2` becomes `[a, b, a, b]`. The result is truncated
    /// to `max_len` when given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n` or `max_len` is zero
    pub fn repeat_sequence(&self, n: usize, max_len: Option<usize>) -> Result<Self> {
        validate_repeat(n, max_len)?;
        let values = self
            .values
            .iter()
            .cycle()
            .take(self.values.len().saturating_mul(n))
            .take(max_len.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(Self { values })
    }

    /// Repeat elements consecutively until exactly `count` values exist
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is zero
    pub fn repeat_elements_to_size(&self, count: usize) -> Result<Self> {
        let n = count / self.values.len() + 1;
        self.repeat_elements(n, Some(count))
    }

    /// Repeat the whole sequence until exactly `count` values exist
    ///
    /// Longer buffers are truncated, so this is the resize used by every
    /// grid strategy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is zero
    pub fn repeat_sequence_to_size(&self, count: usize) -> Result<Self> {
        let n = count / self.values.len() + 1;
        self.repeat_sequence(n, Some(count))
    }

    /// Values in reverse order
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            values: self.values.iter().rev().cloned().collect(),
        }
    }

    /// Append the reversed sequence to form a palindrome
    ///
    /// With a true center the last element is not duplicated
    /// (`[1, 2, 3]` becomes `[1, 2, 3, 2, 1]`); without one the whole
    /// sequence is reflected (`[1, 2, 3, 3, 2, 1]`).
    #[must_use]
    pub fn mirrored(&self, true_center: bool) -> Self {
        let skip = usize::from(true_center);
        let values = self
            .values
            .iter()
            .chain(self.values.iter().rev().skip(skip))
            .cloned()
            .collect();
        Self { values }
    }

    /// Uniformly random permutation of the same values
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut values = self.values.clone();
        values.shuffle(rng);
        Self { values }
    }

    /// Swap `n` pairs of elements that hold different values
    ///
    /// Elements are grouped by equality. Each swap draws two distinct groups
    /// that still have unswapped elements and exchanges one element from
    /// each; an index never takes part in more than one swap.
    pub fn switch_values<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Switched<T>
    where
        T: PartialEq,
    {
        let groups = group_indices(&self.values);
        let mut values = self.values.clone();
        let mut used = bitvec![0; values.len()];
        let mut completed = 0;

        while completed < n {
            let available: Vec<Vec<usize>> = groups
                .iter()
                .map(|group| {
                    group
                        .iter()
                        .copied()
                        .filter(|&index| used.get(index).as_deref() == Some(&false))
                        .collect::<Vec<_>>()
                })
                .filter(|group| !group.is_empty())
                .collect();

            if available.len() < 2 {
                warn!(
                    "switch_values stopped after {completed} of {n} swaps: fewer than two value groups left"
                );
                break;
            }

            let chosen: Vec<&Vec<usize>> = available.choose_multiple(rng, 2).collect();
            let first = chosen.first().and_then(|group| group.choose(rng)).copied();
            let second = chosen.get(1).and_then(|group| group.choose(rng)).copied();
            let (Some(first), Some(second)) = (first, second) else {
                break;
            };

            values.swap(first, second);
            used.set(first, true);
            used.set(second, true);
            completed += 1;
        }

        Switched {
            buffer: Self { values },
            completed,
        }
    }
}

impl<T: Clone + Jitter> SequenceBuffer<T> {
    /// Add an independent N(`mu`, `sigma`²) sample to every element
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `sigma` is negative or not finite, or if
    /// an element has no numeric interpretation
    pub fn add_gaussian_jitter<R: Rng + ?Sized>(
        &self,
        mu: f64,
        sigma: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &sigma,
                &"standard deviation must be finite and non-negative",
            ));
        }
        let normal = Normal::new(mu, sigma).map_err(|e| invalid_parameter("mu", &mu, &e))?;
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.jittered(normal.sample(rng)).ok_or_else(|| {
                    invalid_parameter(
                        "values",
                        &format!("element {index}"),
                        &"gaussian jitter requires numeric values",
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }
}

fn validate_repeat(n: usize, max_len: Option<usize>) -> Result<()> {
    if n == 0 {
        return Err(invalid_parameter("n", &n, &"repeat count must be positive"));
    }
    if max_len == Some(0) {
        return Err(invalid_parameter(
            "max_len",
            &0,
            &"maximum length must be positive",
        ));
    }
    Ok(())
}

/// Partition indices into groups of equal values, in first-seen order
pub(crate) fn group_indices<T: PartialEq>(values: &[T]) -> Vec<Vec<usize>> {
    let mut representatives: Vec<&T> = Vec::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (index, value) in values.iter().enumerate() {
        match representatives.iter().position(|&seen| seen == value) {
            Some(group) => {
                if let Some(members) = groups.get_mut(group) {
                    members.push(index);
                }
            }
            None => {
                representatives.push(value);
                groups.push(vec![index]);
            }
        }
    }

    groups
}
