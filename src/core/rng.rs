//! Deterministic Random Number Generator
//!
//! Uses the Xorshift32 algorithm (shifts 13, 17, 5) for a tiny, fully
//! specified, reproducible stream. Every independent implementation of the
//! board must produce this exact sequence from the same seed, so the
//! transform is written with explicit `u32` wrapping semantics.

use serde::{Deserialize, Serialize};

/// Replacement state used when the caller seeds with zero.
///
/// Zero is a fixed point of the xorshift transform, so a zero state would
/// emit zeros forever.
pub const ZERO_SEED_REPLACEMENT: u32 = 0xDEAD_BEEF;

/// 2^32 as a double, the divisor that maps a `u32` draw into [0, 1).
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic PRNG using the Xorshift32 algorithm.
///
/// # Determinism Guarantee
///
/// Given the same seed, this RNG will produce the exact same sequence
/// of values on any platform.
///
/// # Example
///
/// ```
/// use plinko_fair::core::rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(3_789_414_263);
/// assert_eq!(rng.next_u32(), 475_094_958); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// A zero seed is replaced by [`ZERO_SEED_REPLACEMENT`].
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Generate the next 32-bit value.
    ///
    /// The emitted value is also the new state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Generate a float in [0, 1) by dividing the next draw by 2^32.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> u32 {
        self.state
    }
}

// =============================================================================
// TESTS
// =============================================================================
