//! Insertion position sequences for the tree array benchmarks.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Where each successive element is inserted into a growing array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertionPattern {
    /// Always at the end; the tree degenerates into a right spine.
    Append,
    /// Always at index 0; the tree degenerates into a left spine.
    Front,
    /// Uniformly random over the valid positions; the expected height is
    /// logarithmic.
    Uniform,
}

impl InsertionPattern {
    /// Returns `count` insertion indices, where the `i`-th index lies in
    /// `0..=i`.
    #[must_use]
    pub fn positions(self, count: usize, seed: u64) -> Vec<usize> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..count)
            .map(|len| match self {
                Self::Append => len,
                Self::Front => 0,
                Self::Uniform => rng.gen_range(0..=len),
            })
            .collect()
    }
}

impl fmt::Display for InsertionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Append => "append",
            Self::Front => "front",
            Self::Uniform => "uniform",
        })
    }
}
