#![allow(dead_code)]

use std::cell::RefCell;

use locsync_core::config::{Config, Manifest};
use locsync_core::local::{LocalStore, localized_path};
use locsync_core::model::{Key, Keyset, Value};
use locsync_core::tools::{KeysetIter, StringExtractor, UiResourceTool};
use locsync_core::{Error, Result};
use locsync_fs::{NormalizedPath, checksum, io};

/// Config for `development` plus `languages`, with default file patterns.
pub fn config(development: &str, languages: &[&str]) -> Config {
    let languages = languages
        .iter()
        .map(|l| format!("\"{l}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let manifest = Manifest::parse(&format!(
        "development_language = \"{development}\"\nlanguages = [{languages}]\n\n[remote]\nkind = \"memory\"\n"
    ))
    .expect("test manifest should parse");
    Config::from_manifest(&manifest).expect("test config should resolve")
}

/// Keyset from `(key, language, text)` triples, all unapproved.
pub fn keyset(name: &str, entries: &[(&str, &str, &str)]) -> Keyset {
    let mut keyset = Keyset::new(name);
    for (key, language, text) in entries {
        let mut k = keyset.remove(key).unwrap_or_else(|| Key::new(*key));
        k.set_value(*language, Value::unapproved(*text));
        keyset.insert(k);
    }
    keyset
}

/// Extractor returning fixed keysets, recording the files it was given.
#[derive(Default)]
pub struct FakeExtractor {
    pub keysets: Vec<Keyset>,
    pub seen: RefCell<Vec<NormalizedPath>>,
}

impl FakeExtractor {
    pub fn new(keysets: Vec<Keyset>) -> Self {
        Self {
            keysets,
            seen: RefCell::default(),
        }
    }
}

impl StringExtractor for FakeExtractor {
    fn extract(&self, files: &[NormalizedPath], _development_language: &str) -> Result<KeysetIter<'_>> {
        self.seen.borrow_mut().extend(files.iter().cloned());
        Ok(Box::new(self.keysets.iter().cloned().map(Ok)))
    }
}

/// UI tool over plain-text "xib" files holding `key=value` lines.
///
/// A file without any `=` line has no localizable content.
pub struct FakeUiTool {
    local: LocalStore,
    pub imports: RefCell<Vec<String>>,
    pub localizations: RefCell<Vec<(String, String)>>,
    pub content_checks: RefCell<usize>,
    pub fail_localize: bool,
}

impl FakeUiTool {
    pub fn new(root: &std::path::Path) -> Self {
        Self {
            local: LocalStore::new(root),
            imports: RefCell::default(),
            localizations: RefCell::default(),
            content_checks: RefCell::default(),
            fail_localize: false,
        }
    }

    pub fn localize_count(&self) -> usize {
        self.localizations.borrow().len()
    }

    fn entries(&self, file: &NormalizedPath) -> Result<Vec<(String, String)>> {
        let content = io::read_text(&self.local.absolute(file))?;
        Ok(content
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect())
    }
}

impl UiResourceTool for FakeUiTool {
    fn is_extractable(&self, file: &NormalizedPath, language: &str) -> bool {
        self.local.exists(&localized_path(file, language))
    }

    fn is_localizable(&self, file: &NormalizedPath) -> Result<bool> {
        *self.content_checks.borrow_mut() += 1;
        Ok(!self.entries(file)?.is_empty())
    }

    fn strings_path(&self, file: &NormalizedPath, language: &str) -> NormalizedPath {
        let stem = file.file_stem().unwrap_or_default();
        localized_path(&NormalizedPath::new(format!("{stem}.strings")), language)
    }

    fn extract_strings(&self, file: &NormalizedPath, language: &str) -> Result<Keyset> {
        let mut keyset = Keyset::new(file.file_stem().unwrap_or_default());
        for (key, value) in self.entries(&localized_path(file, language))? {
            keyset.insert(Key::new(key).with_value(language, Value::unapproved(value)));
        }
        Ok(keyset)
    }

    fn import_strings(&self, file: &NormalizedPath, _language: &str) -> Result<()> {
        self.imports.borrow_mut().push(file.to_string());
        Ok(())
    }

    fn localize(&self, file: &NormalizedPath, language: &str) -> Result<()> {
        if self.fail_localize {
            return Err(Error::Tool {
                tool: "fake-ibtool".into(),
                message: "cannot parse document".into(),
            });
        }
        self.localizations
            .borrow_mut()
            .push((file.to_string(), language.to_string()));
        Ok(())
    }

    fn fingerprint(&self, file: &NormalizedPath) -> Result<String> {
        Ok(checksum::compute_file_checksum(&self.local.absolute(file))?)
    }
}
