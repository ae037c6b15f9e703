//! Hashing for Commitments and Seeds
//!
//! Provides the SHA-256 helpers behind every published digest:
//! - Commitment hash (`secret:nonce`)
//! - Combined seed (`secret:client:nonce`)
//! - Peg map hash (canonical JSON text)
//!
//! All digests are rendered as 64 lowercase hex characters, never truncated.

use sha2::{Digest, Sha256};

/// Raw digest output (256 bits / 32 bytes).
pub type DigestBytes = [u8; 32];

/// Separator placed between fields of a hash preimage.
pub const FIELD_SEPARATOR: &str = ":";

/// Hasher over a `:`-joined list of text fields.
///
/// Feeds the UTF-8 bytes of each field to SHA-256 with a single `:` between
/// consecutive fields, so `FieldHasher::new().field("a").field("b")` hashes
/// exactly the text `a:b`. Order of fields is part of the wire format.
pub struct FieldHasher {
    hasher: Sha256,
    fields: usize,
}

impl FieldHasher {
    /// Create an empty hasher.
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            fields: 0,
        }
    }

    /// Append one field.
    #[inline]
    pub fn field(mut self, text: &str) -> Self {
        if self.fields > 0 {
            self.hasher.update(FIELD_SEPARATOR.as_bytes());
        }
        self.hasher.update(text.as_bytes());
        self.fields += 1;
        self
    }

    /// Finalize and return the raw digest.
    pub fn finalize(self) -> DigestBytes {
        self.hasher.finalize().into()
    }

    /// Finalize and return the digest as lowercase hex.
    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl Default for FieldHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 of the UTF-8 bytes of `text`, as lowercase hex.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Commitment hash: `sha256(secret ":" nonce)`.
pub fn commitment_hash(server_secret: &str, nonce: &str) -> String {
    FieldHasher::new()
        .field(server_secret)
        .field(nonce)
        .finalize_hex()
}

/// Combined seed: `sha256(secret ":" client ":" nonce)`.
pub fn combined_seed(server_secret: &str, client_seed: &str, nonce: &str) -> String {
    FieldHasher::new()
        .field(server_secret)
        .field(client_seed)
        .field(nonce)
        .finalize_hex()
}

// =============================================================================
// TESTS
// =============================================================================
