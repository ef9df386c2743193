//! Per-stage results returned by the engine

use serde::Serialize;

use crate::model::MergeCounts;

/// Result of extracting source strings into local files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractReport {
    pub keysets: usize,
    pub new: usize,
    pub updated: usize,
}

impl ExtractReport {
    pub(crate) fn record(&mut self, counts: MergeCounts) {
        self.keysets += 1;
        self.new += counts.new;
        self.updated += counts.updated;
    }
}

/// Result of pruning orphan keys on the remote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub replaced: Vec<String>,
    pub deleted: Vec<String>,
    pub keys_removed: usize,
}

/// Result of pushing local keysets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushReport {
    pub created: Vec<String>,
    /// Keysets written to the remote
    pub replaced: Vec<String>,
    pub new: usize,
    pub updated: usize,
}

/// Result of merging remote translations down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullReport {
    pub keysets: usize,
    pub files_written: usize,
    /// Local keysets with no remote counterpart
    pub missing: Vec<String>,
}

/// Result of incremental UI localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizeReport {
    pub localized: Vec<String>,
    pub unchanged: Vec<String>,
    /// Files with no localizable content
    pub skipped: Vec<String>,
}
