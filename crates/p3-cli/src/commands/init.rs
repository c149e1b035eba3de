//! The `p3 init` command.

use std::path::Path;

use anyhow::Result;

use p3_core::config::LOCAL_CONFIG;

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_CONFIG).exists() {
        println!("{LOCAL_CONFIG} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(LOCAL_CONFIG, SAMPLE_CONFIG)?;
    println!("Created {LOCAL_CONFIG}");

    println!("\nNext steps:");
    println!("  1. Run: p3 hash   (and paste the output into a new [[phrases]] entry)");
    println!("  2. Run: p3 validate");
    println!("  3. Run: p3 drill   (Ctrl-C to stop)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# p3 phrase configuration
#
# Each phrase is a hint shown on screen and the hash of the secret you must
# type. Generate hashes with `p3 hash`; the secrets themselves never go here.

[[phrases]]
hint = "example: the word password"
hash = "sha256-5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
"#;
