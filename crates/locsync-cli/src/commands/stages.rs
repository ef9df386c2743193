//! Engine stages and their prerequisites

use colored::Colorize;

use crate::context::Project;
use crate::error::Result;

/// One engine stage runnable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    DropEmpty,
    CreateKeysets,
    DropOrphans,
    Push,
    FetchStrings,
    LocalizeXibs,
}

impl Stage {
    /// Stages that must run before this one, in order.
    pub fn prerequisites(self) -> &'static [Stage] {
        match self {
            Stage::Extract | Stage::DropEmpty | Stage::FetchStrings | Stage::LocalizeXibs => &[],
            Stage::CreateKeysets => &[Stage::Extract, Stage::DropEmpty],
            Stage::DropOrphans => &[Stage::Extract, Stage::DropEmpty],
            // push creates missing keysets itself
            Stage::Push => &[Stage::Extract, Stage::DropEmpty, Stage::DropOrphans],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::DropEmpty => "drop-empty",
            Stage::CreateKeysets => "create-keysets",
            Stage::DropOrphans => "drop-orphans",
            Stage::Push => "push",
            Stage::FetchStrings => "fetch-strings",
            Stage::LocalizeXibs => "localize-xibs",
        }
    }
}

/// Expand `targets` with their prerequisites. Each stage runs at most once.
pub fn plan(targets: &[Stage], with_deps: bool) -> Vec<Stage> {
    let mut stages = Vec::new();
    for &target in targets {
        let prerequisites = if with_deps { target.prerequisites() } else { &[] };
        for &stage in prerequisites.iter().chain(std::iter::once(&target)) {
            if !stages.contains(&stage) {
                stages.push(stage);
            }
        }
    }
    stages
}

/// Run `stages` in order, stopping at the first failure.
pub fn run_stages(project: &Project, stages: &[Stage]) -> Result<()> {
    for &stage in stages {
        tracing::debug!(stage = stage.label(), "Running stage");
        run_stage(project, stage)?;
    }
    Ok(())
}

fn run_stage(project: &Project, stage: Stage) -> Result<()> {
    let engine = project.engine();
    match stage {
        Stage::Extract => {
            let strings = engine.extract_strings(&project.genstrings)?;
            let xibs = engine.extract_xib_strings(&project.ibtool)?;
            done(
                stage,
                format!(
                    "{} keysets from sources ({} new, {} updated keys), {} from XIBs",
                    strings.keysets, strings.new, strings.updated, xibs
                ),
            );
        }
        Stage::DropEmpty => {
            let dropped = engine.drop_empty_strings()?;
            done(stage, format!("{} empty keysets removed", dropped.len()));
            list_items(&dropped, "-");
        }
        Stage::CreateKeysets => {
            let created = engine.create_keysets()?;
            done(stage, format!("{} remote keysets created", created.len()));
            list_items(&created, "+");
        }
        Stage::DropOrphans => {
            let report = engine.drop_orphan_keys()?;
            done(
                stage,
                format!(
                    "{} orphan keys removed ({} keysets replaced, {} deleted)",
                    report.keys_removed,
                    report.replaced.len(),
                    report.deleted.len()
                ),
            );
        }
        Stage::Push => {
            let report = engine.push()?;
            done(
                stage,
                format!(
                    "{} keysets created, {} updated ({} new, {} updated keys)",
                    report.created.len(),
                    report.replaced.len(),
                    report.new,
                    report.updated
                ),
            );
            list_items(&report.created, "+");
        }
        Stage::FetchStrings => {
            let report = engine.fetch_strings()?;
            done(
                stage,
                format!("{} keysets, {} files written", report.keysets, report.files_written),
            );
            for name in &report.missing {
                println!("   {} {} {}", "!".yellow(), name.cyan(), "not on remote".dimmed());
            }
        }
        Stage::LocalizeXibs => {
            let report = engine.localize_xibs(&project.ibtool)?;
            done(
                stage,
                format!(
                    "{} localized, {} unchanged, {} skipped",
                    report.localized.len(),
                    report.unchanged.len(),
                    report.skipped.len()
                ),
            );
            list_items(&report.localized, "~");
        }
    }
    Ok(())
}

fn done(stage: Stage, summary: String) {
    println!("{} {}: {}", "OK".green().bold(), stage.label().cyan(), summary);
}

fn list_items(items: &[String], marker: &str) {
    for item in items {
        println!("   {} {}", marker.dimmed(), item);
    }
}
