//! Git plumbing for locsync
//!
//! Just enough of git2 to turn a batch of file mutations into one commit:
//! working-tree status, path staging and commit creation.

pub mod commit;
pub mod error;

pub use commit::{commit_paths, dirty_paths, open_repository};
pub use error::{Error, Result};
