//! p3 CLI — drill yourself on pass phrases you must not forget.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "p3", version, about = "Pass phrase memorization drill")]
struct Cli {
    /// Phrase config file (defaults to $P3_CONFIG, ./p3.toml, ~/.config/p3/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for every phrase in random order, forever (the default)
    Drill,

    /// Check a phrase config without starting a drill
    Validate,

    /// Print the hash spec for a secret, ready to paste into a config
    Hash {
        /// Digest algorithm
        #[arg(long, default_value = "sha256")]
        kind: String,
    },

    /// Create a starter p3.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("p3=info,p3_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Drill) {
        Commands::Drill => commands::drill::execute(cli.config).await,
        Commands::Validate => commands::validate::execute(cli.config),
        Commands::Hash { kind } => commands::hash::execute(kind),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
