//! Round Lifecycle
//!
//! A round moves through three phases:
//!
//! ```text
//! Created ──start(client, column)──► Simulated ──reveal()──► Revealed
//! (commitment public)               (outcome public)        (secret public)
//! ```
//!
//! Transitions are one-way. `start` can succeed at most once per round, so
//! a published outcome can never be replaced by one for another column.
//! Persisting rounds and serializing access to them is the caller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::hash::combined_seed;
use crate::core::seed::{Nonce, ServerSecret};
use crate::error::{EngineError, EngineResult};
use crate::game::path::Path;
use crate::game::simulate::{simulate, SimulationParams};
use crate::proof::commitment::RoundCommitment;
use crate::proof::verify::{PublishedRound, VerifyRequest};

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    /// Commitment published, secret hidden.
    Created,
    /// Outcome computed and published, secret still hidden.
    Simulated,
    /// Secret published.
    Revealed,
}

/// Lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    /// Action not allowed in the current phase.
    #[error("cannot {action} a round in status {from:?}")]
    InvalidTransition {
        /// Phase the round was in.
        from: RoundStatus,
        /// Attempted action.
        action: &'static str,
    },

    /// Engine rejected the inputs.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Public results recorded when a round is started.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPlay {
    /// Counterparty-supplied value.
    pub client_seed: String,
    /// Column the ball was dropped from.
    pub drop_column: i64,
    /// `sha256(secret:client:nonce)`.
    pub combined_seed: String,
    /// Hash of the canonical peg map.
    pub peg_map_hash: String,
    /// Ball path.
    pub path: Path,
    /// Landing bin.
    pub bin_index: u32,
}

/// A single commit-reveal round.
#[derive(Clone, Debug)]
pub struct Round {
    id: Uuid,
    status: RoundStatus,
    rows: u32,
    server_secret: ServerSecret,
    nonce: Nonce,
    commitment: RoundCommitment,
    play: Option<RoundPlay>,
    created_at: DateTime<Utc>,
    revealed_at: Option<DateTime<Utc>>,
}

impl Round {
    /// Create a round with a fresh secret and nonce.
    pub fn commit(rows: u32) -> EngineResult<Self> {
        let round = Self::from_parts(ServerSecret::random()?, Nonce::random()?, rows)?;
        info!(
            round_id = %round.id,
            commit_hex = %round.commitment,
            rows,
            "round committed"
        );
        Ok(round)
    }

    /// Create a round from known secret and nonce.
    pub fn from_parts(server_secret: ServerSecret, nonce: Nonce, rows: u32) -> EngineResult<Self> {
        // Validate the board shape up front; column is checked on start.
        SimulationParams::new(0).with_rows(rows).validate()?;

        let commitment = RoundCommitment::new(&server_secret, &nonce);
        Ok(Self {
            id: Uuid::new_v4(),
            status: RoundStatus::Created,
            rows,
            server_secret,
            nonce,
            commitment,
            play: None,
            created_at: Utc::now(),
            revealed_at: None,
        })
    }

    /// Consume the client value and column, and compute the outcome.
    pub fn start(&mut self, client_seed: &str, drop_column: i64) -> Result<&RoundPlay, RoundError> {
        if self.status != RoundStatus::Created {
            return Err(RoundError::InvalidTransition {
                from: self.status,
                action: "start",
            });
        }
        if client_seed.is_empty() {
            return Err(EngineError::InvalidParameter("clientSeed must not be empty".into()).into());
        }

        let params = SimulationParams::new(drop_column).with_rows(self.rows);
        let combined = combined_seed(self.server_secret.as_str(), client_seed, self.nonce.as_str());
        let outcome = simulate(&combined, &params)?;

        info!(
            round_id = %self.id,
            drop_column,
            bin_index = outcome.bin_index,
            "round started"
        );

        self.status = RoundStatus::Simulated;
        Ok(&*self.play.insert(RoundPlay {
            client_seed: client_seed.to_owned(),
            drop_column,
            combined_seed: combined,
            peg_map_hash: outcome.peg_map_hash,
            path: outcome.path,
            bin_index: outcome.bin_index,
        }))
    }

    /// Publish the secret.
    pub fn reveal(&mut self) -> Result<&ServerSecret, RoundError> {
        if self.status != RoundStatus::Simulated {
            return Err(RoundError::InvalidTransition {
                from: self.status,
                action: "reveal",
            });
        }

        self.status = RoundStatus::Revealed;
        self.revealed_at = Some(Utc::now());
        info!(round_id = %self.id, "round revealed");
        Ok(&self.server_secret)
    }

    /// Round identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Board size.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Published commitment.
    pub fn commitment(&self) -> &RoundCommitment {
        &self.commitment
    }

    /// Round nonce.
    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Outcome, once started.
    pub fn play(&self) -> Option<&RoundPlay> {
        self.play.as_ref()
    }

    /// Secret, once revealed.
    pub fn server_secret(&self) -> Option<&ServerSecret> {
        (self.status == RoundStatus::Revealed).then_some(&self.server_secret)
    }

    /// Secret in any phase, for the owner to persist.
    ///
    /// Never publish this before [`reveal`](Self::reveal).
    pub fn sealed_secret(&self) -> &ServerSecret {
        &self.server_secret
    }

    /// Values published before the reveal, for later comparison.
    pub fn published(&self) -> Option<PublishedRound> {
        self.play.as_ref().map(|play| PublishedRound {
            commit_hex: self.commitment.to_string(),
            peg_map_hash: play.peg_map_hash.clone(),
            bin_index: play.bin_index,
            path: play.path.clone(),
        })
    }

    /// Request a third party would submit to re-check this round.
    pub fn verification_request(&self) -> Option<VerifyRequest> {
        let secret = self.server_secret()?;
        let play = self.play.as_ref()?;
        Some(VerifyRequest {
            server_seed: secret.as_str().to_owned(),
            client_seed: play.client_seed.clone(),
            nonce: self.nonce.as_str().to_owned(),
            drop_column: play.drop_column,
            rows: Some(self.rows),
        })
    }

    /// Serializable snapshot that hides the secret until reveal.
    pub fn public_view(&self) -> RoundView {
        RoundView {
            round_id: self.id,
            status: self.status,
            rows: self.rows,
            commit_hex: self.commitment.to_string(),
            nonce: self.nonce.as_str().to_owned(),
            play: self.play.clone(),
            server_seed: self.server_secret().map(|s| s.as_str().to_owned()),
            created_at: self.created_at,
            revealed_at: self.revealed_at,
        }
    }
}

/// Public snapshot of a round.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    /// Round identifier.
    pub round_id: Uuid,
    /// Current phase.
    pub status: RoundStatus,
    /// Board size.
    pub rows: u32,
    /// Commitment hash.
    pub commit_hex: String,
    /// Round nonce.
    pub nonce: String,
    /// Outcome, once started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<RoundPlay>,
    /// Secret, once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_seed: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Reveal time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_at: Option<DateTime<Utc>>,
}
