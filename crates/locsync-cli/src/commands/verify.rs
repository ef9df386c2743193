//! Verify command implementation

use colored::Colorize;

use crate::context::Project;
use crate::error::Result;

/// Report translation coverage. Returns the process exit status.
pub fn run_verify(project: &Project, json: bool) -> Result<i32> {
    let report = project.engine().verify()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.exit_code());
    }

    if report.is_complete() {
        println!(
            "{} All {} keys translated in every language.",
            "OK".green().bold(),
            report.total_keys
        );
    } else {
        println!("{} Translations missing:", "MISSING".yellow().bold());
        for coverage in &report.shortfalls {
            println!(
                "   {} {}: {} of {} keys missing",
                "-".yellow(),
                coverage.language.cyan(),
                coverage.missing,
                coverage.total
            );
        }
    }
    Ok(report.exit_code())
}
