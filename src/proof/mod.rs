//! Commit-Reveal Proof System
//!
//! Provides verifiable round outcomes through:
//! - A commitment published before the client value is known
//! - Verification by deterministic replay after the secret is revealed
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - sha256(secret:nonce) commitment          │
//! │  verify.rs       - Replay and compare published values      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod verify;

// Re-export key types
pub use commitment::RoundCommitment;
pub use verify::{verify, PublishedRound, VerificationError, VerifyRequest, VerifyResponse};
