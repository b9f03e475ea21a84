//! Deterministic random number generation for deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Tiny state**: a single `u32`, captured and restored in O(1)
//! - **Ecosystem-compatible**: implements `rand::RngCore` and `rand::SeedableRng`
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.next_f64(), b.next_f64());
//! ```

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Additive step applied to the state before every output.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the divisor that maps a `u32` output into [0, 1).
const U32_RANGE: f64 = 4_294_967_296.0;

/// Normalize any integer seed to the 32-bit PRNG seed.
///
/// Keeps the low 32 bits (two's complement), so negative seeds and
/// millisecond timestamps are both accepted.
#[must_use]
pub const fn normalize_seed(seed: i64) -> u32 {
    seed as u32
}

/// Seeded 32-bit PRNG (mulberry32 mixing).
///
/// Each step adds a fixed odd constant to the state and runs a
/// multiply/xor-shift finalizer over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a new RNG from an un-normalized seed.
    #[must_use]
    pub const fn from_seed_i64(seed: i64) -> Self {
        Self::new(normalize_seed(seed))
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    /// Next value uniformly distributed in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / U32_RANGE
    }

    /// Uniform integer in `[0, bound)` via `floor(next_f64() * bound)`.
    ///
    /// Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        let scaled = (self.next_f64() * bound as f64) as usize;
        scaled.min(bound.saturating_sub(1))
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState { state: self.state }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self { state: state.state }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates instead of expanding, so `seed_from_u64(n)` and
    /// `GameRng::new(n as u32)` agree.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Serializable RNG state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Internal 32-bit state.
    pub state: u32,
}
