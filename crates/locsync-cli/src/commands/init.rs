//! Init command implementation

use std::path::Path;

use colored::Colorize;
use locsync_core::config::{CONFIG_FILE, DEFAULT_CONFIG};
use locsync_fs::{NormalizedPath, io};

use crate::error::Result;

/// Write a default `locsync.toml` unless one exists.
pub fn run_init(root: &Path) -> Result<()> {
    let path = NormalizedPath::new(root).join(CONFIG_FILE);
    if path.is_file() {
        println!(
            "{} {} already exists, leaving it untouched.",
            "=>".blue().bold(),
            CONFIG_FILE.cyan()
        );
        return Ok(());
    }

    io::write_text(&path, DEFAULT_CONFIG)?;
    println!("{} Created {}", "OK".green().bold(), CONFIG_FILE.cyan());
    println!();
    println!("Add target languages, then run {}.", "locsync sync".cyan());
    Ok(())
}
