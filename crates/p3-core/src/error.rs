//! Error types for phrase ingestion and the quiz loop.
//!
//! `PhraseError` covers everything that can go wrong turning configuration
//! text into typed phrase records. These are startup-time failures: a phrase
//! set containing any of them is never handed to the quiz loop.

use std::io;

use thiserror::Error;

use crate::hash_kind::HashKind;

/// Errors raised while parsing or verifying phrase digests.
#[derive(Debug, Error)]
pub enum PhraseError {
    /// The hash field has no `-` separating the kind from the digest.
    #[error("could not find hash kind separator '-' in '{input}'")]
    MalformedHashSpec { input: String },

    /// The kind prefix names no registered digest algorithm.
    #[error("unsupported hash kind '{name}'")]
    UnsupportedAlgorithm { name: String },

    /// The digest is not valid hex of the length the kind produces.
    #[error("invalid {kind} digest '{digest}': {reason}")]
    InvalidDigest {
        kind: HashKind,
        digest: String,
        reason: String,
    },

    /// An operation that needs a real algorithm was handed the sentinel kind.
    #[error("no hash kind determined, refusing to compute a digest")]
    NoAlgorithm,
}

/// Fatal errors that stop the quiz loop.
///
/// Failing to read a secret is not one of them: the loop logs it and moves
/// on to the next phrase.
#[derive(Debug, Error)]
pub enum QuizError {
    /// There is nothing to drill.
    #[error("no phrases to drill")]
    NoPhrases,

    /// Verification was asked to use a kind it cannot compute.
    #[error("verification failed: {0}")]
    Verify(#[from] PhraseError),

    /// Writing a hint or a result to the output sink failed.
    #[error("could not write to output: {0}")]
    Output(#[from] io::Error),
}
