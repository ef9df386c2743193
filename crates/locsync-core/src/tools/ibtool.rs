//! `ibtool` driver for `.xib` and `.storyboard` files

use locsync_fs::{NormalizedPath, checksum};
use tempfile::TempDir;

use super::{UiResourceTool, run_tool};
use crate::Result;
use crate::local::{LocalStore, keyset_name, localized_path, strings};
use crate::model::{Key, Keyset, Value};

const DEFAULT_PROGRAM: &str = "ibtool";
const UI_EXTENSIONS: &[&str] = &["xib", "storyboard"];

/// Drives `ibtool` for interface files under `<lang>.lproj` directories.
pub struct Ibtool {
    local: LocalStore,
    development_language: String,
    program: String,
}

impl Ibtool {
    pub fn new(root: impl Into<NormalizedPath>, development_language: impl Into<String>) -> Self {
        Self {
            local: LocalStore::new(root),
            development_language: development_language.into(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn variant(&self, file: &NormalizedPath, language: &str) -> NormalizedPath {
        if language == self.development_language {
            file.clone()
        } else {
            localized_path(file, language)
        }
    }
}

impl UiResourceTool for Ibtool {
    fn is_extractable(&self, file: &NormalizedPath, language: &str) -> bool {
        let is_ui = file
            .extension()
            .is_some_and(|ext| UI_EXTENSIONS.contains(&ext));
        is_ui && self.local.exists(&self.variant(file, language))
    }

    fn is_localizable(&self, file: &NormalizedPath) -> Result<bool> {
        if !self.is_extractable(file, &self.development_language) {
            return Ok(false);
        }
        Ok(!self.extract_strings(file, &self.development_language)?.is_empty())
    }

    fn strings_path(&self, file: &NormalizedPath, language: &str) -> NormalizedPath {
        let variant = self.variant(file, language);
        let stem = variant.file_stem().unwrap_or_default();
        let name = format!("{stem}.strings");
        match variant.parent() {
            Some(parent) => parent.join(&name),
            None => NormalizedPath::new(name),
        }
    }

    fn extract_strings(&self, file: &NormalizedPath, language: &str) -> Result<Keyset> {
        let scratch = TempDir::new()?;
        let output = NormalizedPath::new(scratch.path()).join("export.strings");
        let input = self.local.absolute(&self.variant(file, language));
        run_tool(
            &self.program,
            ["--export-strings-file", output.as_str(), input.as_str()],
        )?;

        let mut keyset = Keyset::new(keyset_name(&self.strings_path(file, language)));
        let content = strings::decode(&locsync_fs::io::read_bytes(&output)?);
        let entries = strings::parse(&content).map_err(|e| crate::Error::Tool {
            tool: self.program.clone(),
            message: format!("unreadable export for {file} at line {}: {}", e.line, e.message),
        })?;
        keyset.extend(entries.into_iter().map(|entry| {
            let mut key = Key::new(entry.key).with_value(language, Value::unapproved(entry.value));
            key.context = entry.comment;
            key
        }));
        Ok(keyset)
    }

    fn import_strings(&self, file: &NormalizedPath, language: &str) -> Result<()> {
        let exported = self.extract_strings(file, language)?;
        let path = self.strings_path(file, language);
        let mut current = self.local.read_keyset(&path, language)?;

        let mut added = 0;
        for key in exported.keys() {
            if !current.contains(&key.name) {
                current.insert(key.clone());
                added += 1;
            }
        }
        if added > 0 {
            self.local.write_keyset(&current, &path, language)?;
            tracing::debug!(file = %file, path = %path, added, "Imported new UI strings");
        }
        Ok(())
    }

    fn localize(&self, file: &NormalizedPath, language: &str) -> Result<()> {
        let strings_path = self.strings_path(file, language);
        if !self.local.exists(&strings_path) {
            tracing::debug!(file = %file, language, "No translations yet, skipping");
            return Ok(());
        }

        let target = self.local.absolute(&self.variant(file, language));
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent.to_native())?;
        }
        let source = self.local.absolute(file);
        let strings = self.local.absolute(&strings_path);
        run_tool(
            &self.program,
            [
                "--import-strings-file",
                strings.as_str(),
                "--write",
                target.as_str(),
                source.as_str(),
            ],
        )?;
        tracing::debug!(file = %file, language, "Localized");
        Ok(())
    }

    fn fingerprint(&self, file: &NormalizedPath) -> Result<String> {
        Ok(checksum::compute_file_checksum(&self.local.absolute(file))?)
    }
}
