//! Injected, deterministic random source for a match.
//!
//! Every random decision the engine makes (deck contents, deck order, first
//! player, instance ids) goes through a `GameRng`, so a match built from the
//! same seed replays identically.
//!
//! ```
//! use duel_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_inclusive(1, 5), b.gen_range_inclusive(1, 5));
//!
//! // Context streams are independent of each other
//! let mut decks = a.for_context("deck:0");
//! let mut other = a.for_context("deck:1");
//! let xs: Vec<_> = (0..8).map(|_| decks.gen_range_inclusive(0, 1000)).collect();
//! let ys: Vec<_> = (0..8).map(|_| other.gen_range_inclusive(0, 1000)).collect();
//! assert_ne!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    ///
    /// The chosen seed is still recorded and can be read back with `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how much this RNG has already been advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in `low..=high`.
    ///
    /// Panics if `low > high`.
    pub fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    /// Uniform in-place shuffle (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Random (version 4 layout) UUID drawn from this stream.
    pub fn gen_uuid(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.inner.gen();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
