//! Round Commitment Protocol
//!
//! Commit to the server secret before the client value is known.
//! Reveal the secret after the outcome is published so anyone can check
//! that the commitment was not changed.
//!
//! The commitment covers only `secret:nonce`. It never depends on the
//! client value or the drop column.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::hash::{DigestBytes, FieldHasher};
use crate::core::seed::{Nonce, ServerSecret};
use crate::error::{EngineError, EngineResult};

/// Published commitment: `sha256(secret ":" nonce)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RoundCommitment(DigestBytes);

impl RoundCommitment {
    /// Commit to a secret and nonce.
    pub fn new(server_secret: &ServerSecret, nonce: &Nonce) -> Self {
        Self::from_text(server_secret.as_str(), nonce.as_str())
    }

    /// Commit to raw secret and nonce text.
    pub fn from_text(server_secret: &str, nonce: &str) -> Self {
        Self(FieldHasher::new().field(server_secret).field(nonce).finalize())
    }

    /// Parse a published commitment (64 hex characters).
    pub fn from_hex(text: &str) -> EngineResult<Self> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(text, &mut bytes).map_err(EngineError::InvalidHexEncoding)?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &DigestBytes {
        &self.0
    }

    /// Verify that a revealed secret and nonce produce this commitment.
    pub fn verify(&self, server_secret: &str, nonce: &str) -> bool {
        *self == Self::from_text(server_secret, nonce)
    }
}

impl fmt::Debug for RoundCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundCommitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for RoundCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<RoundCommitment> for String {
    fn from(commitment: RoundCommitment) -> Self {
        commitment.to_string()
    }
}

impl TryFrom<String> for RoundCommitment {
    type Error = EngineError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_hex(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::commitment_hash;

    const SECRET: &str = "b2a5f3f32a4d9c6ee7a8c1d33456677890abcdeffedcba0987654321ffeeddcc";
    const COMMIT: &str = "bb9acdc67f3f18f3345236a01f0e5072596657a9005c7d8a22cff061451a6b34";

    #[test]
    fn test_commitment_vector() {
        let commitment = RoundCommitment::new(&ServerSecret::new(SECRET), &Nonce::new("42"));
        assert_eq!(commitment.to_string(), COMMIT);
        assert_eq!(commitment.to_string(), commitment_hash(SECRET, "42"));
    }

    #[test]
    fn test_commitment_verification() {
        let commitment = RoundCommitment::from_hex(COMMIT).unwrap();
        assert!(commitment.verify(SECRET, "42"));
        assert!(!commitment.verify(SECRET, "43"));
        assert!(!commitment.verify("00", "42"));
    }

    #[test]
    fn test_random_secrets_differ() {
        let nonce = Nonce::new("42");
        let a = RoundCommitment::new(&ServerSecret::random().unwrap(), &nonce);
        let b = RoundCommitment::new(&ServerSecret::random().unwrap(), &nonce);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        // 63 characters: a transcription slip, not a digest.
        assert!(RoundCommitment::from_hex(&COMMIT[..63]).is_err());
        assert!(RoundCommitment::from_hex(&COMMIT[..62]).is_err());
        assert!(RoundCommitment::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let commitment = RoundCommitment::from_hex(COMMIT).unwrap();
        let json = serde_json::to_string(&commitment).unwrap();
        assert_eq!(json, format!("\"{COMMIT}\""));

        let back: RoundCommitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
        assert!(serde_json::from_str::<RoundCommitment>("\"abcd\"").is_err());
    }

    #[test]
    fn test_debug_is_short() {
        let commitment = RoundCommitment::from_hex(COMMIT).unwrap();
        assert_eq!(format!("{commitment:?}"), "RoundCommitment(bb9acdc67f3f18f3)");
    }
}
