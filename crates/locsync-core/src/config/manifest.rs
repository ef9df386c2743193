//! Manifest parsing for `locsync.toml`
//!
//! Every field is optional so a local overlay can override single values.

use locsync_fs::{DocumentStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Kind of remote store backing the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteKind {
    /// One JSON document per keyset under a directory
    Directory,
    /// Process-local store, discarded on exit
    Memory,
}

/// `[remote]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteSection {
    pub kind: RemoteKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_language: Option<String>,

    /// Target languages, excluding the development language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xib_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteSection>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use locsync_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// development_language = "en"
    /// languages = ["fr", "de"]
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.development_language.as_deref(), Some("en"));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let path = NormalizedPath::new(super::CONFIG_FILE);
        Ok(DocumentStore::new().parse(&path, content)?)
    }

    /// Overlay `other` onto this manifest; values set in `other` win.
    pub fn merge(&mut self, other: &Manifest) {
        if other.development_language.is_some() {
            self.development_language = other.development_language.clone();
        }
        if other.languages.is_some() {
            self.languages = other.languages.clone();
        }
        if other.source_files.is_some() {
            self.source_files = other.source_files.clone();
        }
        if other.resource_files.is_some() {
            self.resource_files = other.resource_files.clone();
        }
        if other.xib_files.is_some() {
            self.xib_files = other.xib_files.clone();
        }
        if other.remote.is_some() {
            self.remote = other.remote.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_set_fields() {
        let mut base = Manifest::parse(
            r#"
development_language = "en"
languages = ["fr"]

[remote]
kind = "directory"
path = "../remote"
"#,
        )
        .unwrap();
        let overlay = Manifest::parse("languages = [\"fr\", \"de\"]").unwrap();

        base.merge(&overlay);

        assert_eq!(base.development_language.as_deref(), Some("en"));
        assert_eq!(base.languages, Some(vec!["fr".to_string(), "de".to_string()]));
        assert_eq!(base.remote.unwrap().kind, RemoteKind::Directory);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Manifest::parse("developmnet_language = \"en\"").is_err());
    }
}
