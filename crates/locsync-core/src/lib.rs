//! Localization sync engine
//!
//! Keeps Apple `.strings` resources in a project tree in step with a remote
//! translation store:
//!
//! - [`model`]: keys, values and keysets, with merge semantics
//! - [`local`]: the `.strings` codec and the local resource tree
//! - [`remote`]: the remote store contract and its adapters
//! - [`scm`]: version control and the transaction boundary
//! - [`tools`]: external string extraction and UI resource tools
//! - [`sync`]: the engine stages, orphan pruning, change tracking, verify
//! - [`config`]: `locsync.toml` resolution
//!
//! Runs are single-threaded. Two runs against the same tree or remote at
//! once are unsupported and can corrupt either.

pub mod config;
pub mod error;
pub mod local;
pub mod model;
pub mod remote;
pub mod scm;
pub mod sync;
pub mod tools;

pub use config::{Config, ConfigResolver};
pub use error::{Error, Result};
pub use local::LocalStore;
pub use model::{Key, Keyset, MergeCounts, Status, Value};
pub use remote::{DirectoryRemote, MemoryRemote, RemoteStore, StatusFilter};
pub use scm::{GitScm, NoScm, VersionControl, transaction};
pub use sync::SyncEngine;
