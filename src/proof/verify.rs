//! Verification API
//!
//! Verify rounds by deterministic replay: recompute the commitment and the
//! combined seed from the revealed secret, re-run the simulator, and compare
//! against what was published before the reveal.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::hash::{combined_seed, commitment_hash};
use crate::error::{EngineError, EngineResult};
use crate::game::path::Path;
use crate::game::simulate::{simulate, SimulationParams};
use crate::DEFAULT_ROWS;

/// Fully revealed inputs of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Revealed server secret.
    pub server_seed: String,
    /// Counterparty-supplied value.
    pub client_seed: String,
    /// Round nonce.
    pub nonce: String,
    /// Column the ball was dropped from.
    pub drop_column: i64,
    /// Board size; the default board when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

/// Recomputed artifacts, ready for comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// `sha256(secret:nonce)`.
    pub commit_hex: String,
    /// `sha256(secret:client:nonce)`.
    pub combined_seed: String,
    /// Hash of the canonical peg map.
    pub peg_map_hash: String,
    /// Landing bin.
    pub bin_index: u32,
    /// Ball path.
    pub path: Path,
}

/// Values published before the reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedRound {
    /// Commitment published at round creation.
    pub commit_hex: String,
    /// Peg map hash published at start.
    pub peg_map_hash: String,
    /// Bin published at start.
    pub bin_index: u32,
    /// Path published at start.
    pub path: Path,
}

/// A recomputed value that differs from the published one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// Revealed secret does not open the commitment.
    #[error("commitment mismatch: published {published}, computed {computed}")]
    CommitmentMismatch {
        /// Published value.
        published: String,
        /// Recomputed value.
        computed: String,
    },

    /// Peg map differs from the one published.
    #[error("peg map hash mismatch: published {published}, computed {computed}")]
    PegMapHashMismatch {
        /// Published value.
        published: String,
        /// Recomputed value.
        computed: String,
    },

    /// Landing bin differs.
    #[error("bin index mismatch: published {published}, computed {computed}")]
    BinIndexMismatch {
        /// Published value.
        published: u32,
        /// Recomputed value.
        computed: u32,
    },

    /// Ball path differs.
    #[error("path mismatch: published {published}, computed {computed}")]
    PathMismatch {
        /// Published value.
        published: Path,
        /// Recomputed value.
        computed: Path,
    },
}

impl VerifyRequest {
    /// Simulation parameters implied by the request.
    pub fn params(&self) -> SimulationParams {
        SimulationParams::new(self.drop_column).with_rows(self.rows.unwrap_or(DEFAULT_ROWS))
    }
}

/// Recompute every public artifact of a revealed round.
///
/// Inputs may come from anyone, so all of them are validated here.
pub fn verify(request: &VerifyRequest) -> EngineResult<VerifyResponse> {
    if request.client_seed.is_empty() {
        return Err(EngineError::InvalidParameter(
            "clientSeed must not be empty".into(),
        ));
    }
    let params = request.params();
    params.validate()?;

    let commit_hex = commitment_hash(&request.server_seed, &request.nonce);
    let combined = combined_seed(&request.server_seed, &request.client_seed, &request.nonce);
    let outcome = simulate(&combined, &params)?;

    debug!(commit_hex = %commit_hex, bin_index = outcome.bin_index, "round replayed");

    Ok(VerifyResponse {
        commit_hex,
        combined_seed: combined,
        peg_map_hash: outcome.peg_map_hash,
        bin_index: outcome.bin_index,
        path: outcome.path,
    })
}

impl VerifyResponse {
    /// Compare against published values, reporting the first mismatch.
    pub fn check(&self, published: &PublishedRound) -> Result<(), VerificationError> {
        let result = self.compare(published);
        if let Err(err) = &result {
            warn!(%err, "verification failed");
        }
        result
    }

    fn compare(&self, published: &PublishedRound) -> Result<(), VerificationError> {
        if !self.commit_hex.eq_ignore_ascii_case(&published.commit_hex) {
            return Err(VerificationError::CommitmentMismatch {
                published: published.commit_hex.clone(),
                computed: self.commit_hex.clone(),
            });
        }
        if !self.peg_map_hash.eq_ignore_ascii_case(&published.peg_map_hash) {
            return Err(VerificationError::PegMapHashMismatch {
                published: published.peg_map_hash.clone(),
                computed: self.peg_map_hash.clone(),
            });
        }
        if self.bin_index != published.bin_index {
            return Err(VerificationError::BinIndexMismatch {
                published: published.bin_index,
                computed: self.bin_index,
            });
        }
        if self.path != published.path {
            return Err(VerificationError::PathMismatch {
                published: published.path.clone(),
                computed: self.path.clone(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
