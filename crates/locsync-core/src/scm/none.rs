//! Backend for projects outside version control

use std::cell::RefCell;
use locsync_fs::NormalizedPath;

use super::{Snapshot, VersionControl};
use super::versions::{LEDGER_FILE, VersionLedger};
use crate::Result;

/// Never commits. Fingerprints still persist in the ledger file.
pub struct NoScm {
    ledger_path: Option<NormalizedPath>,
    ledger: RefCell<VersionLedger>,
}

impl NoScm {
    /// Ledger stored under the project `root`.
    pub fn new(root: &NormalizedPath) -> Self {
        let ledger_path = root.join(LEDGER_FILE);
        let ledger = RefCell::new(VersionLedger::load_or_default(&ledger_path));
        Self {
            ledger_path: Some(ledger_path),
            ledger,
        }
    }

    /// Fingerprints kept in memory only.
    pub fn in_memory() -> Self {
        Self {
            ledger_path: None,
            ledger: RefCell::new(VersionLedger::default()),
        }
    }
}

impl VersionControl for NoScm {
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::new())
    }

    fn commit(&self, message: &str, _baseline: &Snapshot) -> Result<Option<String>> {
        tracing::trace!(subject = message, "No version control, skipping commit");
        Ok(None)
    }

    fn stored_version(&self, path: &NormalizedPath) -> Result<Option<String>> {
        Ok(self.ledger.borrow().get(path.as_str()).map(str::to_string))
    }

    fn store_version(&self, path: &NormalizedPath, fingerprint: &str) -> Result<()> {
        self.ledger.borrow_mut().set(path.as_str(), fingerprint);
        Ok(())
    }

    fn flush_versions(&self) -> Result<()> {
        match &self.ledger_path {
            Some(path) => self.ledger.borrow().save(path),
            None => Ok(()),
        }
    }
}
