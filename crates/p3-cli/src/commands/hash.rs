//! The `p3 hash` command.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};

use p3_core::terminal::stdin_reader;
use p3_core::{digest_hex, HashKind, SecretReader};

pub fn execute(kind: String) -> Result<()> {
    let kind = HashKind::resolve(&kind)?;
    let interactive = io::stdin().is_terminal();
    let mut reader = stdin_reader();

    if interactive {
        eprint!("secret: ");
        io::stderr().flush()?;
    }
    let secret = reader.read_secret().context("failed to read secret")?;

    if interactive {
        eprint!("again: ");
        io::stderr().flush()?;
        let again = reader.read_secret().context("failed to read secret")?;
        anyhow::ensure!(secret == again, "secrets did not match");
    }

    anyhow::ensure!(!secret.is_empty(), "secret is empty");

    let digest = digest_hex(&secret, kind)?;
    println!("{kind}-{digest}");

    Ok(())
}
