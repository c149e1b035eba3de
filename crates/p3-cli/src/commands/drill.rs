//! The `p3 drill` command.

use std::io;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use tokio::sync::oneshot;

use p3_core::config::{load_phrase_set, locate_config, validate_phrase_set};
use p3_core::terminal::{ensure_terminal, TerminalReader};
use p3_core::Quiz;

/// Echo stays off if the interrupt lands during a hidden read.
const GOODBYE: &str =
    "goodbye, thanks for playing! (if typed text stays invisible, run `reset`)";

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    tracing::info!("starting p3");

    let path = locate_config(config_path.as_deref())?;
    tracing::info!("using config file '{}'", path.display());

    let phrases = load_phrase_set(&path)?;
    tracing::info!("loaded {} phrases", phrases.len());
    for w in validate_phrase_set(&phrases) {
        tracing::warn!("[#{}] {}", w.entry, w.message);
    }

    ensure_terminal().context("drill needs an interactive terminal for hidden input")?;

    // The quiz thread blocks on terminal reads and is never joined; it dies
    // with the process. It only reports back if the loop fails.
    let (failed_tx, failed_rx) = oneshot::channel();
    thread::Builder::new()
        .name("quiz".into())
        .spawn(move || {
            let mut quiz = Quiz::new(phrases, TerminalReader, io::stdout(), rand::rng());
            match quiz.run() {
                Ok(never) => match never {},
                Err(e) => {
                    let _ = failed_tx.send(e);
                }
            }
        })
        .context("failed to start quiz thread")?;

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res.context("failed to listen for interrupt")?;
            println!();
            tracing::info!("{GOODBYE}");
            Ok(())
        }
        res = failed_rx => match res {
            Ok(e) => Err(e).context("quiz stopped"),
            Err(_) => anyhow::bail!("quiz thread exited unexpectedly"),
        },
    }
}
