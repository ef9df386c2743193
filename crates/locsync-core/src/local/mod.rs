//! Local store: per-language `.strings` files in the project tree
//!
//! All paths handed to and returned from [`LocalStore`] are relative to the
//! project root.

pub mod discovery;
pub mod naming;
pub mod strings;

pub use discovery::{FileMatcher, discover};
pub use naming::{keyset_name, localized_path, resource_path};

use locsync_fs::{NormalizedPath, io};

use crate::model::{Key, Keyset, Value};
use crate::{Error, Result};

/// Reads and writes keysets as `.strings` files under a project root.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: NormalizedPath,
}

impl LocalStore {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Absolute location of a root-relative path.
    pub fn absolute(&self, path: &NormalizedPath) -> NormalizedPath {
        self.root.join(path.as_str())
    }

    pub fn exists(&self, path: &NormalizedPath) -> bool {
        self.absolute(path).is_file()
    }

    /// Path of the `language` file for a keyset.
    pub fn resource_path(&self, keyset_name: &str, language: &str) -> NormalizedPath {
        naming::resource_path(keyset_name, language)
    }

    /// Files under the root matching `patterns`.
    pub fn discover<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Vec<NormalizedPath>> {
        let matcher = FileMatcher::new(patterns)?;
        discover(&self.root, &matcher)
    }

    /// Load the keyset stored at `path`, with values under `language`.
    ///
    /// A missing file yields an empty keyset, not an error.
    pub fn read_keyset(&self, path: &NormalizedPath, language: &str) -> Result<Keyset> {
        let mut keyset = Keyset::new(keyset_name(path));
        let Some(bytes) = io::read_optional(&self.absolute(path))? else {
            return Ok(keyset);
        };

        let content = strings::decode(&bytes);
        let entries = strings::parse(&content).map_err(|e| Error::StringsParse {
            path: path.to_string(),
            line: e.line,
            message: e.message,
        })?;

        for entry in entries {
            let mut key = Key::new(entry.key).with_value(language, Value::unapproved(entry.value));
            key.context = entry.comment;
            if keyset.insert(key).is_some() {
                tracing::debug!(path = %path, "Duplicate key, last definition wins");
            }
        }
        Ok(keyset)
    }

    /// Write the `language` values of `keyset` to `path`.
    ///
    /// Untranslated keys are written with an empty value.
    pub fn write_keyset(&self, keyset: &Keyset, path: &NormalizedPath, language: &str) -> Result<()> {
        let entries: Vec<strings::Entry> = keyset
            .keys()
            .map(|key| strings::Entry {
                key: key.name.clone(),
                value: key.text(language).to_string(),
                comment: key.context.clone(),
            })
            .collect();
        io::write_text(&self.absolute(path), &strings::render(&entries))?;
        Ok(())
    }

    /// Delete a resource file. Returns `false` if it was already gone.
    pub fn remove(&self, path: &NormalizedPath) -> Result<bool> {
        Ok(io::remove_file(&self.absolute(path))?)
    }
}
