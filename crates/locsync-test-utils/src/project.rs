//! [`TestProject`] builder for locsync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary localization project.
///
/// Layout:
///
/// ```text
/// <tmp>/project/   project root (optionally a git repo)
/// <tmp>/remote/    directory-backed remote store
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: PathBuf,
    remote: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create empty project and remote directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        let remote = temp_dir.path().join("remote");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&remote).unwrap();
        Self {
            temp_dir,
            root,
            remote,
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory used by the directory-backed remote.
    pub fn remote_dir(&self) -> &Path {
        &self.remote
    }

    /// The enclosing temporary directory.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Initialise the project root as a git repository.
    pub fn init_git(&self) -> git2::Repository {
        crate::git::real_git_repo(&self.root)
    }

    /// Write `locsync.toml` with a directory remote pointing at
    /// [`Self::remote_dir`].
    pub fn write_config(&self, development: &str, languages: &[&str]) {
        let languages = languages
            .iter()
            .map(|l| format!("\"{l}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let remote = self.remote.to_string_lossy().replace('\\', "/");
        let config = format!(
            "development_language = \"{development}\"\n\
             languages = [{languages}]\n\
             source_files = [\"**/*.swift\"]\n\
             resource_files = [\"**/{development}.lproj/*.strings\"]\n\
             xib_files = [\"**/{development}.lproj/*.xib\"]\n\
             \n\
             [remote]\n\
             kind = \"directory\"\n\
             path = \"{remote}\"\n"
        );
        self.write("locsync.toml", &config);
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }

    /// Write a `.strings` file from `(key, value)` pairs.
    pub fn write_strings(&self, path: &str, entries: &[(&str, &str)]) {
        let mut content = String::new();
        for (key, value) in entries {
            content.push_str(&format!("\"{key}\" = \"{value}\";\n"));
        }
        self.write(path, &content);
    }

    /// Read a file relative to the project root.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path))
            .unwrap_or_else(|e| panic!("TestProject::read: {path}: {e}"))
    }

    /// Whether `path` exists relative to the project root.
    pub fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    /// Assert that `path` (relative to the project root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        assert!(
            self.exists(path),
            "Expected file to exist: {}",
            self.root.join(path).display()
        );
    }
}
