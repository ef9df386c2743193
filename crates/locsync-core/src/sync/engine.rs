//! The sync engine
//!
//! Each stage rebuilds its keysets from the stores; nothing is cached
//! between stages. Stages that write several local files run inside a
//! transaction so they land as one commit.

use std::collections::BTreeSet;

use locsync_fs::NormalizedPath;

use super::prune::{PruneOutcome, prune_orphans};
use super::report::{ExtractReport, LocalizeReport, PruneReport, PullReport, PushReport};
use super::tracker::ChangeTracker;
use super::verify::{VerifyReport, verify};
use crate::Result;
use crate::config::Config;
use crate::local::{LocalStore, keyset_name, localized_path};
use crate::model::Keyset;
use crate::remote::{RemoteStore, StatusFilter};
use crate::scm::{VersionControl, names, transaction};
use crate::tools::{StringExtractor, UiResourceTool};

/// Selector entry meaning every remote keyset.
pub const ALL_KEYSETS: &str = "*";

/// Split a comma-separated keyset selector, trimming entries and dropping
/// empty ones.
pub fn parse_selector(selector: &str) -> Vec<String> {
    selector
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs sync stages against one project.
pub struct SyncEngine<'a> {
    config: &'a Config,
    local: &'a LocalStore,
    remote: &'a dyn RemoteStore,
    scm: &'a dyn VersionControl,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        config: &'a Config,
        local: &'a LocalStore,
        remote: &'a dyn RemoteStore,
        scm: &'a dyn VersionControl,
    ) -> Self {
        Self {
            config,
            local,
            remote,
            scm,
        }
    }

    fn development(&self) -> &str {
        &self.config.development_language
    }

    /// Development-language resource files.
    pub fn resource_files(&self) -> Result<Vec<NormalizedPath>> {
        self.local.discover(&self.config.resource_files)
    }

    /// Every local keyset, read in the development language.
    fn local_keysets(&self) -> Result<Vec<(NormalizedPath, Keyset)>> {
        self.resource_files()?
            .into_iter()
            .map(|path| {
                let keyset = self.local.read_keyset(&path, self.development())?;
                Ok((path, keyset))
            })
            .collect()
    }

    fn remote_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.remote.list()?.into_iter().collect())
    }

    /// Merge strings found in source files into the development-language
    /// resource files.
    pub fn extract_strings(&self, extractor: &dyn StringExtractor) -> Result<ExtractReport> {
        transaction(self.scm, names::EXTRACT_SOURCES, || {
            tracing::info!("Extracting strings from sources");
            let development = self.development();
            let sources = self.local.discover(&self.config.source_files)?;
            let mut report = ExtractReport::default();

            for extracted in extractor.extract(&sources, development)? {
                let extracted = extracted?;
                let path = self.local.resource_path(extracted.name(), development);
                let mut current = self.local.read_keyset(&path, development)?;
                let counts = current.merge(&extracted, false);
                self.local.write_keyset(&current, &path, development)?;
                tracing::debug!(
                    keyset = extracted.name(),
                    path = %path,
                    new = counts.new,
                    updated = counts.updated,
                    keys = current.len(),
                    "Merged extracted strings"
                );
                report.record(counts);
            }
            Ok(report)
        })
    }

    /// Export the text of UI files into their development-language strings
    /// files. Returns how many files were written.
    pub fn extract_xib_strings(&self, tool: &dyn UiResourceTool) -> Result<usize> {
        transaction(self.scm, names::EXTRACT_XIBS, || {
            tracing::info!("Extracting strings from XIBs");
            let development = self.development();
            let mut written = 0;

            for file in self.local.discover(&self.config.xib_files)? {
                if !tool.is_extractable(&file, development) {
                    continue;
                }
                let keyset = tool.extract_strings(&file, development)?;
                if keyset.is_empty() {
                    continue;
                }
                let path = tool.strings_path(&file, development);
                self.local.write_keyset(&keyset, &path, development)?;
                tracing::debug!(file = %file, path = %path, keys = keyset.len(), "Exported XIB strings");
                written += 1;
            }
            Ok(written)
        })
    }

    /// Delete development-language resource files that hold no keys, along
    /// with their localized siblings. Returns the dropped keyset names.
    pub fn drop_empty_strings(&self) -> Result<Vec<String>> {
        transaction(self.scm, names::DROP_EMPTY, || {
            tracing::info!("Dropping empty .strings files");
            let mut dropped = Vec::new();

            for (path, keyset) in self.local_keysets()? {
                if !keyset.is_empty() {
                    continue;
                }
                self.local.remove(&path)?;
                tracing::info!(path = %path, "Removed empty file");
                for language in &self.config.target_languages {
                    let sibling = localized_path(&path, language);
                    if self.local.remove(&sibling)? {
                        tracing::info!(path = %sibling, "Removed empty file");
                    }
                }
                dropped.push(keyset.name().to_string());
            }
            Ok(dropped)
        })
    }

    /// Create remote keysets for local keysets the remote lacks. Empty
    /// local keysets are skipped.
    pub fn create_keysets(&self) -> Result<Vec<String>> {
        let mut existing = self.remote_names()?;
        self.create_missing(&mut existing)
    }

    /// Create local keysets absent from `existing`, adding them to it.
    fn create_missing(&self, existing: &mut BTreeSet<String>) -> Result<Vec<String>> {
        tracing::info!("Creating remote keysets for local keysets");
        let mut created = Vec::new();

        for (_, keyset) in self.local_keysets()? {
            let name = keyset.name();
            if existing.contains(name) {
                tracing::debug!(keyset = name, "Remote keyset exists");
                continue;
            }
            if keyset.is_empty() {
                continue;
            }
            self.remote.create(name)?;
            tracing::debug!(keyset = name, "Created remote keyset");
            existing.insert(name.to_string());
            created.push(name.to_string());
        }
        Ok(created)
    }

    /// Remove remote keys that no longer exist locally.
    ///
    /// A remote keyset left empty is deleted; one that lost some keys is
    /// replaced; an untouched one is not written.
    pub fn drop_orphan_keys(&self) -> Result<PruneReport> {
        tracing::info!("Dropping orphan keys");
        let existing = self.remote_names()?;
        let mut report = PruneReport::default();

        for (_, local) in self.local_keysets()? {
            let name = local.name();
            if !existing.contains(name) {
                continue;
            }
            let mut remote = self.remote.load_keyset(name, StatusFilter::Any)?;
            let outcome = prune_orphans(&mut remote, &local.key_names());
            match outcome {
                PruneOutcome::Unchanged => continue,
                PruneOutcome::Replace { .. } => {
                    self.remote.replace(&remote)?;
                    report.replaced.push(name.to_string());
                }
                PruneOutcome::Delete { .. } => {
                    self.remote.drop_keyset(name)?;
                    report.deleted.push(name.to_string());
                }
            }
            tracing::debug!(keyset = name, outcome = ?outcome, "Pruned orphan keys");
            report.keys_removed += outcome.removed();
        }
        Ok(report)
    }

    /// Send local keys to the remote.
    ///
    /// Approved non-empty remote values win over local ones; the remote is
    /// written only when the merge changed something.
    pub fn push(&self) -> Result<PushReport> {
        let mut existing = self.remote_names()?;
        let created = self.create_missing(&mut existing)?;

        tracing::info!("Pushing local keys to the remote");
        let languages = self.config.all_languages();
        let mut report = PushReport {
            created,
            ..PushReport::default()
        };

        for (_, local) in self.local_keysets()? {
            let name = local.name();
            if !existing.contains(name) {
                tracing::debug!(keyset = name, "No remote keyset, skipping");
                continue;
            }
            let mut remote = self.remote.load_keyset(name, StatusFilter::UnapprovedOrBetter)?;
            let counts = remote.merge(&local, true);
            remote.ensure_languages(&languages);
            if counts.is_changed() {
                self.remote.replace(&remote)?;
                tracing::debug!(keyset = name, new = counts.new, updated = counts.updated, "Replaced remote keyset");
                report.replaced.push(name.to_string());
                report.new += counts.new;
                report.updated += counts.updated;
            }
        }
        Ok(report)
    }

    /// Overwrite local files in every configured language with the remote
    /// translations.
    pub fn fetch_strings(&self) -> Result<PullReport> {
        transaction(self.scm, names::MERGE_REMOTE, || {
            tracing::info!("Fetching remote translations");
            let existing = self.remote_names()?;
            let languages = self.config.all_languages();
            let mut report = PullReport::default();

            for path in self.resource_files()? {
                let name = keyset_name(&path);
                if !existing.contains(&name) {
                    tracing::warn!(keyset = %name, "No remote keyset, skipping");
                    report.missing.push(name);
                    continue;
                }
                let mut remote = self.remote.load_keyset(&name, StatusFilter::UnapprovedOrBetter)?;
                remote.drop_empty();

                for language in &languages {
                    let file = self.local.resource_path(&name, language);
                    self.local.write_keyset(&remote, &file, language)?;
                    tracing::debug!(keyset = %name, path = %file, "Wrote translations");
                    report.files_written += 1;
                }
                report.keysets += 1;
            }
            Ok(report)
        })
    }

    /// Re-localize UI files whose development-language content changed.
    pub fn localize_xibs(&self, tool: &dyn UiResourceTool) -> Result<LocalizeReport> {
        let files = self.local.discover(&self.config.xib_files)?;
        ChangeTracker::new(self.config, tool, self.scm).run(&files)
    }

    /// Fetch translations, then re-localize UI files.
    pub fn pull(&self, tool: &dyn UiResourceTool) -> Result<(PullReport, LocalizeReport)> {
        let pulled = self.fetch_strings()?;
        let localized = self.localize_xibs(tool)?;
        Ok((pulled, localized))
    }

    pub fn verify(&self) -> Result<VerifyReport> {
        verify(self.config, self.local)
    }

    /// Remote keyset names, sorted.
    pub fn list_remote(&self) -> Result<Vec<String>> {
        let mut names = self.remote.list()?;
        names.sort();
        Ok(names)
    }

    /// Drop the remote keysets named by a comma-separated `selector`.
    ///
    /// `*` selects every keyset. Without a selector nothing is dropped and
    /// `None` is returned.
    pub fn drop_remote_keysets(&self, selector: Option<&str>) -> Result<Option<Vec<String>>> {
        let Some(selector) = selector else {
            tracing::error!(
                "Provide keyset names to drop in KEYSETS, separated by commas. Use * for all."
            );
            return Ok(None);
        };

        let mut names = parse_selector(selector);
        if names.iter().any(|n| n == ALL_KEYSETS) {
            names = self.list_remote()?;
            tracing::info!(count = names.len(), "Dropping all keysets");
        } else {
            tracing::info!(keysets = ?names, "Dropping keysets");
        }

        for name in &names {
            tracing::debug!(keyset = %name, "Dropping");
            self.remote.drop_keyset(name)?;
        }
        Ok(Some(names))
    }
}
