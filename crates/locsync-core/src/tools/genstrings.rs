//! `genstrings` driver

use std::fs;

use locsync_fs::{NormalizedPath, io};
use tempfile::TempDir;

use super::{KeysetIter, StringExtractor, run_tool};
use crate::local::{keyset_name, strings};
use crate::model::{Key, Keyset, Value};
use crate::{Error, Result};

const DEFAULT_PROGRAM: &str = "genstrings";

/// Extracts strings by running `genstrings` into a scratch directory.
///
/// One keyset is produced per table (`Localizable`, plus any table named in
/// `NSLocalizedStringFromTable` calls).
pub struct Genstrings {
    root: NormalizedPath,
    program: String,
}

impl Genstrings {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl StringExtractor for Genstrings {
    fn extract(&self, files: &[NormalizedPath], development_language: &str) -> Result<KeysetIter<'_>> {
        if files.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let scratch = TempDir::new()?;
        let mut args = vec!["-o".to_string(), scratch.path().to_string_lossy().into_owned()];
        args.extend(files.iter().map(|f| self.root.join(f.as_str()).to_string()));
        run_tool(&self.program, &args)?;

        let mut tables: Vec<NormalizedPath> = fs::read_dir(scratch.path())?
            .filter_map(|entry| entry.ok())
            .map(|entry| NormalizedPath::new(entry.path()))
            .filter(|path| path.extension() == Some("strings"))
            .collect();
        tables.sort();
        tracing::debug!(sources = files.len(), tables = tables.len(), "genstrings finished");

        let language = development_language.to_string();
        // The iterator owns the scratch directory so it outlives every read
        let iter = tables.into_iter().map(move |table| {
            let _scratch = &scratch;
            read_table(&table, &language)
        });
        Ok(Box::new(iter))
    }
}

fn read_table(path: &NormalizedPath, language: &str) -> Result<Keyset> {
    let content = strings::decode(&io::read_bytes(path)?);
    let entries = strings::parse(&content).map_err(|e| Error::StringsParse {
        path: path.to_string(),
        line: e.line,
        message: e.message,
    })?;

    let name = path
        .file_name()
        .map(|n| keyset_name(&NormalizedPath::new(n)))
        .unwrap_or_default();
    let mut keyset = Keyset::new(name);
    keyset.extend(entries.into_iter().map(|entry| {
        let key = Key::new(entry.key).with_value(language, Value::unapproved(entry.value));
        match entry.comment {
            Some(comment) => key.with_context(comment),
            None => key,
        }
    }));
    Ok(keyset)
}
