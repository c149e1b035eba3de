//! The `p3 validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use p3_core::config::{load_phrase_set, locate_config, validate_phrase_set};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let path = locate_config(config_path.as_deref())?;
    let set = load_phrase_set(&path)?;

    println!("Config: {} ({} phrases)", path.display(), set.len());

    let mut table = Table::new();
    table.set_header(vec!["#", "Hint", "Kind"]);
    for (i, record) in set.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(record.hint()),
            Cell::new(record.kind()),
        ]);
    }
    println!("{table}");

    let warnings = validate_phrase_set(&set);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.entry, w.message);
    }

    if warnings.is_empty() {
        println!("All phrases valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
