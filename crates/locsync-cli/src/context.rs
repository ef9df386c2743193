//! Project context: configuration plus the adapters it selects

use std::path::{Path, PathBuf};

use locsync_core::config::{Config, ConfigResolver, RemoteConfig};
use locsync_core::remote::{DirectoryRemote, MemoryRemote, RemoteStore};
use locsync_core::scm::{GitScm, NoScm, VersionControl};
use locsync_core::tools::{Genstrings, Ibtool};
use locsync_core::{LocalStore, SyncEngine};
use locsync_fs::NormalizedPath;

use crate::error::Result;

/// Everything a command needs to run engine stages on one project.
pub struct Project {
    pub config: Config,
    pub local: LocalStore,
    remote: Box<dyn RemoteStore>,
    scm: Box<dyn VersionControl>,
    pub genstrings: Genstrings,
    pub ibtool: Ibtool,
}

impl Project {
    /// Resolve configuration under `root` and open the adapters it names.
    pub fn open(root: &Path) -> Result<Self> {
        let root = NormalizedPath::new(root);
        let config = ConfigResolver::new(root.clone()).resolve()?;

        let remote: Box<dyn RemoteStore> = match (&config.remote, config.remote_dir(&root)) {
            (RemoteConfig::Directory { .. }, Some(dir)) => {
                tracing::debug!(dir = %dir, "Using directory remote");
                Box::new(DirectoryRemote::new(dir))
            }
            _ => {
                tracing::debug!("Using in-memory remote");
                Box::new(MemoryRemote::new())
            }
        };

        let scm: Box<dyn VersionControl> = match GitScm::open(&root.to_native()) {
            Ok(git) => Box::new(git),
            Err(locsync_core::Error::Git(locsync_git::Error::NotARepository { .. })) => {
                tracing::debug!(root = %root, "Not a git repository, changes will not be committed");
                Box::new(NoScm::new(&root))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            genstrings: Genstrings::new(root.clone()),
            ibtool: Ibtool::new(root.clone(), config.development_language.clone()),
            local: LocalStore::new(root),
            config,
            remote,
            scm,
        })
    }

    pub fn engine(&self) -> SyncEngine<'_> {
        SyncEngine::new(&self.config, &self.local, self.remote.as_ref(), self.scm.as_ref())
    }
}

/// Absolute project root from `-C` or the current directory.
pub fn project_root(directory: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let root = match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    Ok(root.canonicalize()?)
}
