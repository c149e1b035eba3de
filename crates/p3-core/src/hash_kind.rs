//! Registry of supported digest algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::PhraseError;

/// Which digest algorithm produced (and verifies) a phrase's digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    Sha256,
    /// No algorithm was determined. Only ever seen on error paths; never
    /// used to compute a digest.
    NoKind,
}

impl HashKind {
    /// Every kind that can appear in a phrase record.
    pub const REGISTERED: &'static [HashKind] = &[HashKind::Sha256];

    /// Resolve a textual kind name, e.g. the `sha256` in `sha256-<digest>`.
    pub fn resolve(name: &str) -> Result<Self, PhraseError> {
        name.parse()
    }

    /// The name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            HashKind::Sha256 => "sha256",
            HashKind::NoKind => "no kind / error",
        }
    }

    /// Returns `true` for registered kinds, `false` for the sentinel.
    pub fn is_valid(self) -> bool {
        Self::REGISTERED.contains(&self)
    }

    /// Length of the lowercase hex rendering of this kind's digest.
    pub fn hex_len(self) -> Option<usize> {
        match self {
            HashKind::Sha256 => Some(64),
            HashKind::NoKind => None,
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashKind {
    type Err = PhraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::REGISTERED
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PhraseError::UnsupportedAlgorithm { name: s.to_string() })
    }
}
