//! # Plinko Fair
//!
//! Provably-fair outcome engine for a falling-ball board game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       PLINKO FAIR                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Xorshift32 PRNG                           │
//! │  ├── hash.rs     - SHA-256 commitment / seed hashing         │
//! │  ├── seed.rs     - Secrets, nonces, seed_from_hex            │
//! │  └── decimal.rs  - Six-decimal rounding and text form        │
//! │                                                              │
//! │  game/           - Board logic                               │
//! │  ├── board.rs    - Peg map (bias matrix)                     │
//! │  ├── path.rs     - Left/right decisions                      │
//! │  ├── simulate.rs - Seed to outcome                           │
//! │  └── round.rs    - Created / Simulated / Revealed            │
//! │                                                              │
//! │  proof/          - Commit-reveal                             │
//! │  ├── commitment.rs - sha256(secret:nonce)                    │
//! │  └── verify.rs   - Replay and compare                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! secret + nonce           ──► commitment (published at creation)
//! secret + client + nonce  ──► combined seed
//! combined seed + column   ──► peg map, path, bin (published at start)
//! secret revealed          ──► anyone recomputes and compares
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same combined seed, row count and drop column, `simulate`
//! produces byte-identical peg map text, hash, path and bin on every
//! platform. Nothing in `core/` (except entropy), `game/simulate.rs` or
//! `proof/` keeps state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use config::EngineConfig;
pub use crate::core::rng::DeterministicRng;
pub use crate::core::seed::{seed_from_hex, Nonce, ServerSecret};
pub use error::{EngineError, EngineResult};
pub use game::{simulate, Direction, Path, PegMap, Round, RoundOutcome, RoundStatus, SimulationParams};
pub use proof::{verify, PublishedRound, RoundCommitment, VerificationError, VerifyRequest, VerifyResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rows on the standard board.
pub const DEFAULT_ROWS: u32 = 12;

/// Largest board the engine will simulate.
pub const MAX_ROWS: u32 = 1024;
