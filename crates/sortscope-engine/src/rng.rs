#![forbid(unsafe_code)]

//! Deterministic xorshift32 PRNG for sequence generation.
//!
//! Seedable so that sessions (and tests) can reproduce exact sequences;
//! seeded from the system clock by default.

use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic xorshift32 PRNG.
///
/// State is never zero: a zero seed is remapped so the generator cannot
/// get stuck.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator seeded from the system clock.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0x5EED_5EED);
        Self::with_seed(nanos)
    }

    /// Create a generator with an explicit seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x5EED_5EED } else { seed },
        }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `[lo, hi]` (inclusive). `lo > hi` is treated
    /// as the single value `lo`.
    pub fn gen_range(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        let span = hi - lo + 1;
        lo + self.next_u32() % span
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}
