//! Fingerprint ledger
//!
//! Maps project-relative UI resource paths to the checksum of the content
//! they were last localized from. Stored as TOML so it can be committed
//! alongside the files it describes.

use std::collections::BTreeMap;

use locsync_fs::{DocumentStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Ledger location relative to the project root
pub const LEDGER_FILE: &str = ".locsync/versions.toml";

const LEDGER_VERSION: u32 = 1;

fn default_version() -> u32 {
    LEDGER_VERSION
}

/// Persisted fingerprint records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLedger {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl Default for VersionLedger {
    fn default() -> Self {
        Self {
            version: LEDGER_VERSION,
            files: BTreeMap::new(),
        }
    }
}

impl VersionLedger {
    /// Load the ledger at `path`.
    ///
    /// A missing or unreadable ledger yields an empty one, so every file is
    /// reprocessed rather than the run failing.
    pub fn load_or_default(path: &NormalizedPath) -> Self {
        if !path.is_file() {
            return Self::default();
        }
        match DocumentStore::new().load(path) {
            Ok(ledger) => ledger,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Ignoring unreadable version ledger");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        DocumentStore::new().save(path, self)?;
        Ok(())
    }

    pub fn get(&self, file: &str) -> Option<&str> {
        self.files.get(file).map(String::as_str)
    }

    /// Record a fingerprint. Returns whether the entry changed.
    pub fn set(&mut self, file: impl Into<String>, fingerprint: impl Into<String>) -> bool {
        let fingerprint = fingerprint.into();
        let previous = self.files.insert(file.into(), fingerprint.clone());
        previous.as_deref() != Some(fingerprint.as_str())
    }
}
