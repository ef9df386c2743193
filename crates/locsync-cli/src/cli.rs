//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// locsync - Keep .strings resources in sync with a translation store
#[derive(Parser, Debug)]
#[command(name = "locsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Run only the named stage, skipping its prerequisites
    #[arg(long, global = true)]
    pub no_deps: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a default locsync.toml
    Init,

    /// Extract strings from sources and XIBs into development-language files
    Extract,

    /// Delete .strings files that hold no keys
    DropEmpty,

    /// Create remote keysets for new local keysets
    CreateKeysets,

    /// Remove remote keys that no longer exist locally
    DropOrphans,

    /// Push local keys to the remote
    ///
    /// Runs extract, drop-empty, create-keysets and drop-orphans first
    /// unless --no-deps is given.
    Push,

    /// Merge remote translations into local files
    FetchStrings,

    /// Re-localize XIB files whose content changed
    LocalizeXibs,

    /// Fetch translations, then localize XIB files
    Pull,

    /// Push, then pull
    Sync,

    /// Check that every key is translated in every language
    ///
    /// Exits with status 1 when translations are missing.
    Verify {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Inspect and maintain the remote store
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },
}

/// Remote maintenance
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    /// List remote keysets
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Drop remote keysets
    ///
    /// Examples:
    ///   KEYSETS=Login,Main locsync remote drop-keysets
    ///   locsync remote drop-keysets --keysets '*'
    DropKeysets {
        /// Comma-separated keyset names; * for all
        #[arg(long, env = "KEYSETS")]
        keysets: Option<String>,
    },
}
