//! Dice.
//!
//! Checks roll through the [`DieRoller`] trait, so hosts can feed
//! pre-rolled or GM-fudged results. [`DiceRng`] is the seeded default and
//! [`FixedRolls`] replays a script.
//!
//! ```
//! use d100_engine::core::{DiceRng, DieRoller};
//!
//! let mut rng = DiceRng::new(42);
//! let roll = rng.d100();
//! assert!((1..=100).contains(&roll));
//!
//! // Same seed, same dice.
//! let mut again = DiceRng::new(42);
//! assert_eq!(again.d100(), roll);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of die results for checks.
pub trait DieRoller {
    /// Roll one die with `sides` faces, uniform in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll one percentile die, uniform in `1..=100`.
    fn d100(&mut self) -> u32 {
        self.roll_die(100)
    }
}

/// Seeded dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DiceRng(ChaCha8Rng);

impl DiceRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl DieRoller for DiceRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of results.
///
/// Results are clamped into `1..=sides`. Once the queue is exhausted the
/// roller falls back to a `DiceRng` seeded with 0.
#[derive(Clone, Debug)]
pub struct FixedRolls {
    queue: VecDeque<u32>,
    fallback: DiceRng,
}

impl FixedRolls {
    /// Queue the given results in order.
    pub fn new(results: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: results.into_iter().collect(),
            fallback: DiceRng::new(0),
        }
    }

    /// Number of queued results not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DieRoller for FixedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        match self.queue.pop_front() {
            Some(result) => result.clamp(1, sides.max(1)),
            None => self.fallback.roll_die(sides),
        }
    }
}
