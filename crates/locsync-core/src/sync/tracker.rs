//! Incremental re-localization of UI resources
//!
//! A UI file is re-localized only when the fingerprint of its
//! development-language content differs from the one recorded after the
//! last successful run.

use locsync_fs::NormalizedPath;

use super::report::LocalizeReport;
use crate::Result;
use crate::config::Config;
use crate::scm::{VersionControl, names, transaction};
use crate::tools::UiResourceTool;

/// Decides which UI files need localizing and records what was done.
pub struct ChangeTracker<'a> {
    config: &'a Config,
    tool: &'a dyn UiResourceTool,
    scm: &'a dyn VersionControl,
}

impl<'a> ChangeTracker<'a> {
    pub fn new(config: &'a Config, tool: &'a dyn UiResourceTool, scm: &'a dyn VersionControl) -> Self {
        Self { config, tool, scm }
    }

    /// Whether `file` must be processed, with its current fingerprint.
    ///
    /// Fingerprints that cannot be computed or read force reprocessing.
    fn needs_localizing(&self, file: &NormalizedPath) -> (bool, Option<String>) {
        let current = match self.tool.fingerprint(file) {
            Ok(fingerprint) => fingerprint,
            Err(e) => {
                tracing::debug!(file = %file, error = %e, "Fingerprint unavailable");
                return (true, None);
            }
        };
        let stored = match self.scm.stored_version(file) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::debug!(file = %file, error = %e, "Stored fingerprint unreadable");
                None
            }
        };
        (stored.as_deref() != Some(current.as_str()), Some(current))
    }

    /// Localize every changed file in `files`, then record fingerprints in
    /// a second transaction.
    pub fn run(&self, files: &[NormalizedPath]) -> Result<LocalizeReport> {
        let development = self.config.development_language.as_str();
        let mut processed = Vec::new();

        let report = transaction(self.scm, names::LOCALIZE_XIBS, || {
            tracing::info!(files = files.len(), "Localizing XIB files");
            let mut report = LocalizeReport::default();
            for file in files {
                let (changed, fingerprint) = self.needs_localizing(file);
                if !changed {
                    tracing::debug!(file = %file, "Unchanged since last localization");
                    report.unchanged.push(file.to_string());
                    continue;
                }

                // Only changed files reach the tool
                if !self.tool.is_localizable(file)? {
                    tracing::warn!(file = %file, "No localizable resources, skipping");
                    report.skipped.push(file.to_string());
                    continue;
                }

                self.tool.import_strings(file, development)?;
                for language in &self.config.target_languages {
                    self.tool.localize(file, language)?;
                }
                report.localized.push(file.to_string());
                if let Some(fingerprint) = fingerprint {
                    processed.push((file.clone(), fingerprint));
                }
            }
            Ok(report)
        })?;

        transaction(self.scm, names::UPDATE_VERSIONS, || {
            if processed.is_empty() {
                return Ok(());
            }
            for (file, fingerprint) in &processed {
                self.scm.store_version(file, fingerprint)?;
            }
            self.scm.flush_versions()
        })?;

        Ok(report)
    }
}
