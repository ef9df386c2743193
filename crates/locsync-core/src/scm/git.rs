//! git2-backed version control

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::Path;

use git2::Repository;
use locsync_fs::NormalizedPath;
use locsync_fs::checksum::compute_file_checksum;

use super::{Snapshot, VersionControl};
use super::versions::{LEDGER_FILE, VersionLedger};
use crate::Result;

/// Commits through a git repository; fingerprints live in a tracked ledger.
pub struct GitScm {
    repo: Repository,
    workdir: NormalizedPath,
    ledger_path: NormalizedPath,
    ledger: RefCell<VersionLedger>,
}

impl GitScm {
    /// Open the repository containing the project `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let repo = locsync_git::open_repository(root)?;
        let workdir = repo
            .workdir()
            .map(NormalizedPath::new)
            .ok_or_else(|| locsync_git::Error::BareRepository {
                path: repo.path().to_path_buf(),
            })?;
        let ledger_path = NormalizedPath::new(root).join(LEDGER_FILE);
        let ledger = RefCell::new(VersionLedger::load_or_default(&ledger_path));
        Ok(Self {
            repo,
            workdir,
            ledger_path,
            ledger,
        })
    }

    /// Working-tree fingerprint of a repository-relative path.
    fn fingerprint(&self, path: &str) -> Result<Option<String>> {
        let full = self.workdir.join(path);
        if !full.is_file() {
            return Ok(None);
        }
        Ok(Some(compute_file_checksum(&full)?))
    }
}

impl VersionControl for GitScm {
    fn snapshot(&self) -> Result<Snapshot> {
        locsync_git::dirty_paths(&self.repo)?
            .into_iter()
            .map(|path| {
                let fingerprint = self.fingerprint(&path)?;
                Ok((path, fingerprint))
            })
            .collect()
    }

    fn commit(&self, message: &str, baseline: &Snapshot) -> Result<Option<String>> {
        let mut paths = BTreeSet::new();
        for (path, fingerprint) in self.snapshot()? {
            match baseline.get(&path) {
                Some(before) if *before == fingerprint => {
                    tracing::debug!(path = %path, "Leaving pre-existing change uncommitted");
                }
                _ => {
                    paths.insert(path);
                }
            }
        }
        if paths.is_empty() {
            return Ok(None);
        }
        let oid = locsync_git::commit_paths(&self.repo, message, &paths)?;
        Ok(oid.map(|oid| oid.to_string()))
    }

    fn stored_version(&self, path: &NormalizedPath) -> Result<Option<String>> {
        Ok(self.ledger.borrow().get(path.as_str()).map(str::to_string))
    }

    fn store_version(&self, path: &NormalizedPath, fingerprint: &str) -> Result<()> {
        self.ledger.borrow_mut().set(path.as_str(), fingerprint);
        Ok(())
    }

    fn flush_versions(&self) -> Result<()> {
        self.ledger.borrow().save(&self.ledger_path)
    }
}
