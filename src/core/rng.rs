//! Deterministic random number generation for the search.
//!
//! All randomized choices in the search (expansion pick, rollout policy) draw
//! from an explicit `SearchRng` seeded through `SearchConfig`, never from
//! global RNG state. Same seed, same sequence, same search result.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic, forkable RNG for UCT search.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Forking creates an independent branch for each rollout so that the
/// expansion stream stays stable regardless of rollout length.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SearchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
