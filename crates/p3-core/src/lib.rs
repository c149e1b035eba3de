//! p3-core — Pass phrase drill engine.
//!
//! Phrases are stored as `<kind>-<digest>` specs next to a hint. This crate
//! parses them into typed records, verifies typed secrets against their
//! digests, and runs the shuffle-prompt-verify loop.

pub mod config;
pub mod error;
pub mod extract;
pub mod hash_kind;
pub mod phrase;
pub mod quiz;
pub mod terminal;
pub mod verify;

pub use error::{PhraseError, QuizError};
pub use extract::extract;
pub use hash_kind::HashKind;
pub use phrase::{PhraseRecord, PhraseSet};
pub use quiz::{Outcome, Quiz, SecretReader};
pub use verify::{digest_hex, verify};
