//! Digest computation and comparison.

use sha2::{Digest, Sha256};

use crate::error::PhraseError;
use crate::hash_kind::HashKind;

/// Compute the lowercase hex digest of `secret` with `kind`'s algorithm.
pub fn digest_hex(secret: &[u8], kind: HashKind) -> Result<String, PhraseError> {
    match kind {
        HashKind::Sha256 => Ok(hex::encode(Sha256::digest(secret))),
        HashKind::NoKind => Err(PhraseError::NoAlgorithm),
    }
}

/// Check whether `secret` hashes to `expected_hex`.
///
/// The comparison is exact: `expected_hex` must already be lowercase with
/// no surrounding whitespace.
pub fn verify(secret: &[u8], expected_hex: &str, kind: HashKind) -> Result<bool, PhraseError> {
    Ok(digest_hex(secret, kind)? == expected_hex)
}
