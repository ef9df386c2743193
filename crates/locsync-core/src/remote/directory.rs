//! Remote store backed by a directory of JSON documents
//!
//! Each keyset lives in `<dir>/<encoded name>.json`. Keyset names contain
//! `/`, so `%` and `/` are percent-encoded to keep one flat directory.

use std::fs;

use locsync_fs::{DocumentStore, NormalizedPath, io};

use super::{RemoteStore, StatusFilter, apply_filter};
use crate::model::Keyset;
use crate::{Error, Result};

const EXTENSION: &str = ".json";

/// Directory-backed remote store.
#[derive(Debug, Clone)]
pub struct DirectoryRemote {
    dir: NormalizedPath,
    store: DocumentStore,
}

impl DirectoryRemote {
    /// Open a directory remote. The directory is created on first write.
    pub fn new(dir: impl Into<NormalizedPath>) -> Self {
        Self {
            dir: dir.into(),
            store: DocumentStore::new(),
        }
    }

    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }

    fn keyset_path(&self, name: &str) -> NormalizedPath {
        self.dir.join(&format!("{}{EXTENSION}", encode_name(name)))
    }

    fn save(&self, keyset: &Keyset) -> Result<()> {
        self.store.save(&self.keyset_path(keyset.name()), keyset)?;
        Ok(())
    }
}

impl RemoteStore for DirectoryRemote {
    fn list(&self) -> Result<Vec<String>> {
        let native = self.dir.to_native();
        let entries = match fs::read_dir(&native) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(locsync_fs::Error::io(&native, e).into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(encoded) = file_name.strip_suffix(EXTENSION)
                && !encoded.starts_with('.')
            {
                names.push(decode_name(encoded));
            }
        }
        names.sort();
        Ok(names)
    }

    fn create(&self, name: &str) -> Result<()> {
        if self.keyset_path(name).is_file() {
            return Err(Error::RemoteKeysetExists { name: name.into() });
        }
        self.save(&Keyset::new(name))?;
        tracing::debug!(keyset = name, dir = %self.dir, "Created remote keyset");
        Ok(())
    }

    fn load_keyset(&self, name: &str, filter: StatusFilter) -> Result<Keyset> {
        let path = self.keyset_path(name);
        if !path.is_file() {
            return Err(Error::RemoteKeysetNotFound { name: name.into() });
        }
        let keyset: Keyset = self.store.load(&path)?;
        Ok(apply_filter(keyset, filter))
    }

    fn replace(&self, keyset: &Keyset) -> Result<()> {
        if !self.keyset_path(keyset.name()).is_file() {
            return Err(Error::RemoteKeysetNotFound {
                name: keyset.name().into(),
            });
        }
        self.save(keyset)
    }

    fn drop_keyset(&self, name: &str) -> Result<()> {
        if io::remove_file(&self.keyset_path(name))? {
            Ok(())
        } else {
            Err(Error::RemoteKeysetNotFound { name: name.into() })
        }
    }
}

fn encode_name(name: &str) -> String {
    name.replace('%', "%25").replace('/', "%2F")
}

fn decode_name(encoded: &str) -> String {
    encoded.replace("%2F", "/").replace("%25", "%")
}
