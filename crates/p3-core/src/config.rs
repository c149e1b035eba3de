//! Phrase configuration loading.
//!
//! Reads the TOML phrase file, turns every entry into a validated
//! [`PhraseRecord`], and refuses to produce a set if any entry is bad.
//!
//! ```toml
//! [[phrases]]
//! hint = "laptop disk"
//! hash = "sha256-5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::phrase::{PhraseRecord, PhraseSet};

/// Name of the config file looked for in the current directory.
pub const LOCAL_CONFIG: &str = "p3.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "P3_CONFIG";

#[derive(Debug, Deserialize)]
struct TomlPhraseFile {
    #[serde(default)]
    phrases: Vec<TomlPhrase>,
}

#[derive(Debug, Deserialize)]
struct TomlPhrase {
    hint: String,
    hash: String,
}

/// Find the config file to load.
///
/// Search order:
/// 1. The explicit `path`, which must exist
/// 2. `$P3_CONFIG`, which must exist if set
/// 3. `p3.toml` in the current directory
/// 4. `~/.config/p3/config.toml`
pub fn locate_config(path: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = path {
        anyhow::ensure!(p.exists(), "config file not found: {}", p.display());
        return Ok(p.to_path_buf());
    }

    if let Ok(p) = std::env::var(CONFIG_ENV) {
        let p = PathBuf::from(p);
        anyhow::ensure!(
            p.exists(),
            "config file from {CONFIG_ENV} not found: {}",
            p.display()
        );
        return Ok(p);
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Ok(local);
    }

    if let Some(global) = dirs_path().map(|d| d.join("config.toml")) {
        if global.exists() {
            return Ok(global);
        }
    }

    anyhow::bail!("no config file found; pass --config or create {LOCAL_CONFIG}")
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("p3"))
}

/// Load and validate the phrase set in a config file.
pub fn load_phrase_set(path: &Path) -> Result<PhraseSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    parse_phrase_set_str(&content, path)
}

/// Parse a TOML string into a `PhraseSet` (useful for testing).
pub fn parse_phrase_set_str(content: &str, source_path: &Path) -> Result<PhraseSet> {
    let parsed: TomlPhraseFile = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    anyhow::ensure!(
        !parsed.phrases.is_empty(),
        "no phrases configured in {}",
        source_path.display()
    );

    parsed
        .phrases
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let hint = strip_quotes(&p.hint);
            let spec = strip_quotes(&p.hash);
            PhraseRecord::from_spec(hint, spec).with_context(|| {
                format!("could not extract hash in '{spec}' (phrase #{}, hint '{hint}')", i + 1)
            })
        })
        .collect()
}

/// Strip every leading and trailing `"` from a config value.
///
/// Values that were quoted twice still load. Quote characters that belong
/// at either end of a hint are lost as well.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// A non-fatal issue found in a phrase set.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the phrase in the set.
    pub entry: usize,
    /// Warning message.
    pub message: String,
}

/// Check a phrase set for entries that load fine but make a poor drill.
pub fn validate_phrase_set(set: &PhraseSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate hints
    let mut seen_hints = std::collections::HashSet::new();
    for (i, record) in set.iter().enumerate() {
        if !seen_hints.insert(record.hint()) {
            warnings.push(ValidationWarning {
                entry: i + 1,
                message: format!("duplicate hint: {}", record.hint()),
            });
        }
    }

    // Check for one secret behind several hints
    let mut by_digest: HashMap<&str, usize> = HashMap::new();
    for (i, record) in set.iter().enumerate() {
        match by_digest.get(record.digest_hex()) {
            Some(first) => warnings.push(ValidationWarning {
                entry: i + 1,
                message: format!("same secret as phrase #{first}"),
            }),
            None => {
                by_digest.insert(record.digest_hex(), i + 1);
            }
        }
    }

    // Check for empty hints
    for (i, record) in set.iter().enumerate() {
        if record.hint().trim().is_empty() {
            warnings.push(ValidationWarning {
                entry: i + 1,
                message: "hint is empty".into(),
            });
        }
    }

    warnings
}
