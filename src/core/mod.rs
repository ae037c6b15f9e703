//! Core deterministic primitives.
//!
//! Everything here is pure: the same input yields the same bytes on any
//! platform. The one exception is secret/nonce generation in `seed`, which
//! reads OS entropy.

pub mod decimal;
pub mod hash;
pub mod rng;
pub mod seed;

// Re-export core types
pub use decimal::{clamp_unit, round6};
pub use hash::{combined_seed, commitment_hash, sha256_hex, FieldHasher};
pub use rng::{DeterministicRng, ZERO_SEED_REPLACEMENT};
pub use seed::{random_nonce, random_secret, seed_from_hex, Nonce, ServerSecret};
