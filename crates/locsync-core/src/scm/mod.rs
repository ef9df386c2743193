//! Version control and the transaction boundary
//!
//! A transaction groups the file writes of one engine stage into a single
//! commit. The working tree is never rolled back: when the stage fails the
//! commit is withheld and the partial result stays on disk for inspection.

mod git;
mod none;
mod versions;

pub use git::GitScm;
pub use none::NoScm;
pub use versions::{LEDGER_FILE, VersionLedger};

use std::collections::BTreeMap;

use locsync_fs::NormalizedPath;

use crate::{Error, Result};

/// Commit subjects, one per transactional stage.
pub mod names {
    pub const EXTRACT_SOURCES: &str = "[locsync] Extract strings from sources";
    pub const EXTRACT_XIBS: &str = "[locsync] Extract strings from XIBs";
    pub const DROP_EMPTY: &str = "[locsync] Drop empty .strings files";
    pub const MERGE_REMOTE: &str = "[locsync] Merge in remote translations";
    pub const LOCALIZE_XIBS: &str = "[locsync] Localize XIB files";
    pub const UPDATE_VERSIONS: &str = "[locsync] Update XIB version refs";
}

/// Uncommitted paths mapped to a fingerprint of their working-tree
/// content. `None` marks a path deleted from the working tree.
pub type Snapshot = BTreeMap<String, Option<String>>;

/// Version-control backend used by transactions and the change tracker.
pub trait VersionControl {
    /// Fingerprint every path that currently differs from the last commit.
    fn snapshot(&self) -> Result<Snapshot>;

    /// Commit under `message` every path whose content moved away from
    /// `baseline`, including paths that were already uncommitted in it.
    ///
    /// Returns the new commit id, or `None` when nothing needed committing.
    fn commit(&self, message: &str, baseline: &Snapshot) -> Result<Option<String>>;

    /// Last recorded fingerprint of a project-relative file.
    fn stored_version(&self, path: &NormalizedPath) -> Result<Option<String>>;

    /// Record a fingerprint in memory. Persisted by [`Self::flush_versions`].
    fn store_version(&self, path: &NormalizedPath, fingerprint: &str) -> Result<()>;

    /// Write recorded fingerprints to the ledger file.
    fn flush_versions(&self) -> Result<()>;
}

/// Run `op` as one named changeset.
///
/// Uncommitted edits made before `op` ran stay out of the commit unless
/// `op` rewrote the same file. On failure nothing is committed and the
/// error is wrapped in [`Error::TransactionFailed`].
pub fn transaction<T>(scm: &dyn VersionControl, name: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    let baseline = scm.snapshot()?;
    tracing::debug!(transaction = name, preexisting = baseline.len(), "Begin transaction");

    match op() {
        Ok(value) => {
            match scm.commit(name, &baseline)? {
                Some(id) => tracing::info!(transaction = name, commit = %id, "Committed"),
                None => tracing::debug!(transaction = name, "No changes to commit"),
            }
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(transaction = name, error = %e, "Transaction failed, commit withheld");
            Err(Error::TransactionFailed {
                name: name.to_string(),
                source: Box::new(e),
            })
        }
    }
}
