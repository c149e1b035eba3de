//! Phrase records and the set the quiz drills through.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PhraseError;
use crate::extract::extract;
use crate::hash_kind::HashKind;

/// A secret the user should know, stored only as its digest.
///
/// Records are immutable once built. Construction rejects the sentinel kind
/// and digests that are not lowercase hex of the right length, so every
/// record that exists can be verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRecord {
    digest_hex: String,
    hint: String,
    kind: HashKind,
}

impl PhraseRecord {
    /// Build a record from an already-split kind and digest.
    pub fn new(
        hint: impl Into<String>,
        kind: HashKind,
        digest_hex: impl Into<String>,
    ) -> Result<Self, PhraseError> {
        if !kind.is_valid() {
            return Err(PhraseError::NoAlgorithm);
        }
        let digest_hex = digest_hex.into();
        let expected_len = kind.hex_len().ok_or(PhraseError::NoAlgorithm)?;

        let invalid = |reason: String| PhraseError::InvalidDigest {
            kind,
            digest: digest_hex.clone(),
            reason,
        };
        if digest_hex.len() != expected_len {
            return Err(invalid(format!(
                "expected {expected_len} hex characters, found {}",
                digest_hex.len()
            )));
        }
        if !digest_hex
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(invalid("expected lowercase hexadecimal".into()));
        }

        Ok(Self {
            digest_hex,
            hint: hint.into(),
            kind,
        })
    }

    /// Build a record from a `<kind>-<digest>` spec.
    ///
    /// Uppercase hex digits in the digest are accepted and folded to
    /// lowercase.
    pub fn from_spec(hint: impl Into<String>, spec: &str) -> Result<Self, PhraseError> {
        let (kind, digest) = extract(spec)?;
        Self::new(hint, kind, digest.to_ascii_lowercase())
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn kind(&self) -> HashKind {
        self.kind
    }

    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }

    /// Check a typed secret against this record.
    pub fn matches(&self, secret: &[u8]) -> Result<bool, PhraseError> {
        crate::verify::verify(secret, &self.digest_hex, self.kind)
    }
}

impl fmt::Display for PhraseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hash={},hint={},kind={}",
            self.digest_hex, self.hint, self.kind
        )
    }
}

/// The ordered phrases of one session.
///
/// Content is fixed at construction; only the order changes, once per round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseSet {
    records: Vec<PhraseRecord>,
}

impl PhraseSet {
    pub fn new(records: Vec<PhraseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhraseRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[PhraseRecord] {
        &self.records
    }

    /// Reorder the records into a uniformly random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }
}

impl FromIterator<PhraseRecord> for PhraseSet {
    fn from_iter<I: IntoIterator<Item = PhraseRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PhraseSet {
    type Item = &'a PhraseRecord;
    type IntoIter = std::slice::Iter<'a, PhraseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
