//! Deterministic random number generation with named streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches for lookahead or simulations
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!
//! The engine never reaches for ambient randomness. Every source of chance
//! (deck shuffling, demolition targets, trawler sub-rolls) draws from a
//! stream derived from the caller-supplied seed, so a game is fully
//! replayable from `(seed, action sequence, injected dice values)`.
//!
//! ```
//! use machi_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Contexts are independent but deterministic per seed.
//! let mut shuffle = rng.for_context("deck");
//! let mut shuffle2 = GameRng::new(42).for_context("deck");
//! assert_eq!(shuffle.gen_range(0..100), shuffle2.gen_range(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing all engine randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// Supports forking and context-based independent streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

/// Two RNGs are equal when they would produce the same future stream:
/// same seed, same position, same fork counter.
impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

impl GameRng {
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
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Separates randomness domains (deck shuffling vs in-resolution rolls)
    /// so that consuming one stream never shifts another. The same context
    /// always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Roll a single six-sided die.
    pub fn roll_d6(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// The in-resolution randomness carried by a game.
///
/// Dice sums for the main roll are injected by the caller, but two card
/// effects roll on their own: the demolition company picks a landmark to
/// tear down, and the trawler rolls a pair of d6 for its payout. Each gets
/// its own stream so replaying a game with extra trawler activations never
/// shifts the demolition targets, and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectStreams {
    /// Picks the landmark un-built by the demolition company.
    pub demolition: GameRng,
    /// Rolls the trawler's secondary 2d6 payout.
    pub trawler: GameRng,
}

impl EffectStreams {
    /// Derive both streams from a base RNG's seed.
    #[must_use]
    pub fn from_rng(rng: &GameRng) -> Self {
        Self {
            demolition: rng.for_context("demolition"),
            trawler: rng.for_context("trawler"),
        }
    }
}
