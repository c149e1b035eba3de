//! Parsing of combined `<kind>-<digest>` hash specs.

use crate::error::PhraseError;
use crate::hash_kind::HashKind;

/// Split a hash spec such as `sha256-5e88…` into its kind and digest.
///
/// The split happens at the first `-`. The digest is returned exactly as
/// written; case and whitespace are left to the caller.
pub fn extract(combined: &str) -> Result<(HashKind, &str), PhraseError> {
    let (prefix, digest) =
        combined
            .split_once('-')
            .ok_or_else(|| PhraseError::MalformedHashSpec {
                input: combined.to_string(),
            })?;

    let kind = HashKind::resolve(prefix)?;
    Ok((kind, digest))
}
