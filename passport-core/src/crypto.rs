//! Payload digest for credential anchoring.
//!
//! The on-chain record is a SHA-256 digest over the canonical JSON form of
//! [`AnchorPayload`]. Struct field order and the caller-supplied account
//! order define the canonical form, so equal payloads always hash equal.

use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};
use crate::types::AnchorPayload;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of the payload's canonical serialization.
pub fn credential_digest(payload: &AnchorPayload) -> CoreResult<[u8; DIGEST_LEN]> {
    let canonical = serde_json::to_vec(payload)
        .map_err(|e| CoreError::Storage(format!("Failed to serialize anchor payload: {e}")))?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hasher.finalize().into())
}

/// Hex rendering of a digest.
#[must_use]
pub fn digest_hex(digest: &[u8; DIGEST_LEN]) -> String {
    hex::encode(digest)
}
