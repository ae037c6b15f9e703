//! Secrets, Nonces and Seed Derivation
//!
//! Server secrets and nonces come from the operating system entropy source.
//! A failing source is reported as [`EngineError::Entropy`]; there is no
//! fallback to a weaker generator.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Random bytes in a server secret (64 hex characters).
pub const SECRET_BYTES: usize = 32;

/// Random bytes in a nonce (16 hex characters).
pub const NONCE_BYTES: usize = 8;

/// Leading hex characters consumed by [`seed_from_hex`] (4 bytes).
pub const SEED_HEX_CHARS: usize = 8;

/// Hidden per-round server secret, hex-rendered.
///
/// `Debug` prints only a short prefix so the secret cannot leak into logs
/// before reveal.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerSecret(String);

impl ServerSecret {
    /// Generate a fresh secret from OS entropy.
    pub fn random() -> EngineResult<Self> {
        Ok(Self(random_secret()?))
    }

    /// Wrap an existing (revealed) secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Hex text of the secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.0.get(..8).unwrap_or("");
        write!(f, "ServerSecret({prefix}..)")
    }
}

/// Per-round nonce, hex-rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(String);

impl Nonce {
    /// Generate a fresh nonce from OS entropy.
    pub fn random() -> EngineResult<Self> {
        Ok(Self(random_nonce()?))
    }

    /// Wrap an existing nonce. Length is not enforced.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }

    /// Text of the nonce.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn random_hex(len: usize) -> EngineResult<String> {
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// 32 random bytes as 64 lowercase hex characters.
pub fn random_secret() -> EngineResult<String> {
    random_hex(SECRET_BYTES)
}

/// 8 random bytes as 16 lowercase hex characters.
pub fn random_nonce() -> EngineResult<String> {
    random_hex(NONCE_BYTES)
}

/// Parse the first 4 bytes of a hex string as a big-endian `u32`.
///
/// Only the leading 8 characters are inspected; anything after them is
/// ignored.
pub fn seed_from_hex(hex: &str) -> EngineResult<u32> {
    let head = hex
        .as_bytes()
        .get(..SEED_HEX_CHARS)
        .ok_or(EngineError::InvalidSeedLength { len: hex.len() })?;

    let mut bytes = [0u8; SEED_HEX_CHARS / 2];
    hex::decode_to_slice(head, &mut bytes)?;
    Ok(u32::from_be_bytes(bytes))
}

// =============================================================================
// TESTS
// =============================================================================
