//! Remote maintenance commands

use colored::Colorize;

use crate::context::Project;
use crate::error::Result;

/// Print remote keyset names.
pub fn run_list(project: &Project, json: bool) -> Result<()> {
    let names = project.engine().list_remote()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("{}", "No remote keysets".dimmed());
    }
    for name in &names {
        println!("{name}");
    }
    Ok(())
}

/// Drop the keysets named in `selector`. Without a selector nothing happens.
pub fn run_drop_keysets(project: &Project, selector: Option<&str>) -> Result<()> {
    match project.engine().drop_remote_keysets(selector)? {
        Some(dropped) => {
            println!("{} Dropped {} keysets", "OK".green().bold(), dropped.len());
            for name in &dropped {
                println!("   {} {}", "-".red(), name);
            }
        }
        None => {
            println!(
                "Set {} (comma-separated, {} for all) to choose keysets.",
                "KEYSETS".cyan(),
                "*".cyan()
            );
        }
    }
    Ok(())
}
