//! Project configuration
//!
//! Read once per run from `locsync.toml` at the project root, with an
//! optional git-ignored `locsync.local.toml` overlay for per-developer
//! overrides (a different remote directory, for instance).

mod manifest;
mod settings;

pub use manifest::{Manifest, RemoteKind, RemoteSection};
pub use settings::{Config, RemoteConfig};

use locsync_fs::{DocumentStore, NormalizedPath};

use crate::{Error, Result};

/// Repository configuration file name
pub const CONFIG_FILE: &str = "locsync.toml";

/// Local, uncommitted overlay
pub const LOCAL_CONFIG_FILE: &str = "locsync.local.toml";

/// Starting configuration written by `locsync init`.
pub const DEFAULT_CONFIG: &str = r#"# Language the source code is written in
development_language = "en"

# Languages translated through the remote store
languages = []

# Sources scanned for localizable strings
source_files = ["**/*.swift", "**/*.m"]

# Development-language resource files; one keyset per file
resource_files = ["**/en.lproj/*.strings"]

# Interface files re-localized when they change
xib_files = ["**/en.lproj/*.xib"]

[remote]
kind = "directory"
path = ".locsync/remote"
"#;

/// Resolves the effective configuration for a project root.
pub struct ConfigResolver {
    root: NormalizedPath,
    store: DocumentStore,
}

impl ConfigResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            store: DocumentStore::new(),
        }
    }

    /// Whether the project has a configuration file.
    pub fn has_config(&self) -> bool {
        self.config_path().is_file()
    }

    pub fn config_path(&self) -> NormalizedPath {
        self.root.join(CONFIG_FILE)
    }

    /// Load `locsync.toml`, apply the local overlay, and fill defaults.
    pub fn resolve(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }

        let mut manifest: Manifest = self.store.load(&path)?;

        let local_path = self.root.join(LOCAL_CONFIG_FILE);
        if local_path.is_file() {
            let overlay: Manifest = self.store.load(&local_path)?;
            manifest.merge(&overlay);
            tracing::debug!(path = %local_path, "Applied local configuration overlay");
        }

        Config::from_manifest(&manifest)
    }
}
