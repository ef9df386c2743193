//! locsync CLI
//!
//! Synchronizes Apple `.strings` resources with a translation store.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, RemoteAction};
use commands::Stage;
use context::{Project, project_root};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u8> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} Localization sync", "locsync".green().bold());
        println!();
        println!("Run {} for available commands.", "locsync --help".cyan());
        return Ok(0);
    };

    let root = project_root(cli.directory.as_deref())?;
    tracing::debug!(root = %root.display(), "Project root");

    if command == Commands::Init {
        commands::run_init(&root)?;
        return Ok(0);
    }

    let project = Project::open(&root)?;
    let with_deps = !cli.no_deps;

    match command {
        Commands::Init => {}
        Commands::Extract => run_plan(&project, &[Stage::Extract], with_deps)?,
        Commands::DropEmpty => run_plan(&project, &[Stage::DropEmpty], with_deps)?,
        Commands::CreateKeysets => run_plan(&project, &[Stage::CreateKeysets], with_deps)?,
        Commands::DropOrphans => run_plan(&project, &[Stage::DropOrphans], with_deps)?,
        Commands::Push => run_plan(&project, &[Stage::Push], with_deps)?,
        Commands::FetchStrings => run_plan(&project, &[Stage::FetchStrings], with_deps)?,
        Commands::LocalizeXibs => run_plan(&project, &[Stage::LocalizeXibs], with_deps)?,
        Commands::Pull => run_plan(&project, &[Stage::FetchStrings, Stage::LocalizeXibs], with_deps)?,
        Commands::Sync => run_plan(
            &project,
            &[Stage::Push, Stage::FetchStrings, Stage::LocalizeXibs],
            with_deps,
        )?,
        Commands::Verify { json } => {
            let code = commands::run_verify(&project, json)?;
            return Ok(u8::try_from(code).unwrap_or(1));
        }
        Commands::Remote { action } => match action {
            RemoteAction::List { json } => commands::run_list(&project, json)?,
            RemoteAction::DropKeysets { keysets } => {
                commands::run_drop_keysets(&project, keysets.as_deref())?
            }
        },
    }
    Ok(0)
}

fn run_plan(project: &Project, targets: &[Stage], with_deps: bool) -> Result<()> {
    commands::run_stages(project, &commands::plan(targets, with_deps))
}
