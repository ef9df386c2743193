//! Resolved, immutable configuration

use std::collections::BTreeSet;

use locsync_fs::NormalizedPath;

use super::manifest::{Manifest, RemoteKind};
use crate::{Error, Result};

const DEFAULT_DEVELOPMENT_LANGUAGE: &str = "en";
const DEFAULT_REMOTE_DIR: &str = ".locsync/remote";

/// Where remote keysets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteConfig {
    /// Directory store; relative paths resolve against the project root
    Directory { path: String },
    Memory,
}

/// Effective configuration, fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub development_language: String,
    pub target_languages: BTreeSet<String>,
    pub source_files: Vec<String>,
    pub resource_files: Vec<String>,
    pub xib_files: Vec<String>,
    pub remote: RemoteConfig,
}

impl Config {
    /// Build a configuration from a (merged) manifest, filling defaults.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let development_language = manifest
            .development_language
            .clone()
            .unwrap_or_else(|| DEFAULT_DEVELOPMENT_LANGUAGE.to_string());
        validate_language(&development_language)?;

        let mut target_languages = BTreeSet::new();
        for language in manifest.languages.iter().flatten() {
            validate_language(language)?;
            if *language != development_language {
                target_languages.insert(language.clone());
            }
        }

        let source_files = manifest
            .source_files
            .clone()
            .unwrap_or_else(|| vec!["**/*.swift".into(), "**/*.m".into()]);
        let resource_files = manifest
            .resource_files
            .clone()
            .unwrap_or_else(|| vec![format!("**/{development_language}.lproj/*.strings")]);
        let xib_files = manifest
            .xib_files
            .clone()
            .unwrap_or_else(|| vec![format!("**/{development_language}.lproj/*.xib")]);

        let remote = match &manifest.remote {
            None => RemoteConfig::Directory {
                path: DEFAULT_REMOTE_DIR.to_string(),
            },
            Some(section) => match section.kind {
                RemoteKind::Memory => RemoteConfig::Memory,
                RemoteKind::Directory => RemoteConfig::Directory {
                    path: section
                        .path
                        .clone()
                        .unwrap_or_else(|| DEFAULT_REMOTE_DIR.to_string()),
                },
            },
        };

        Ok(Self {
            development_language,
            target_languages,
            source_files,
            resource_files,
            xib_files,
            remote,
        })
    }

    /// Development language first, then targets in order.
    pub fn all_languages(&self) -> Vec<String> {
        std::iter::once(self.development_language.clone())
            .chain(self.target_languages.iter().cloned())
            .collect()
    }

    /// Absolute remote directory for a directory remote.
    pub fn remote_dir(&self, root: &NormalizedPath) -> Option<NormalizedPath> {
        match &self.remote {
            RemoteConfig::Directory { path } if std::path::Path::new(path).is_absolute() => {
                Some(NormalizedPath::new(path))
            }
            RemoteConfig::Directory { path } => Some(root.join(path)),
            RemoteConfig::Memory => None,
        }
    }
}

fn validate_language(language: &str) -> Result<()> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            message: format!("invalid language code '{language}'"),
        })
    }
}
