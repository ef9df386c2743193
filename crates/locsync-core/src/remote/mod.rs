//! Remote translation store
//!
//! The remote holds the authoritative copy of every keyset, including all
//! target-language translations and their review status.

mod directory;
mod memory;

pub use directory::DirectoryRemote;
pub use memory::{MemoryRemote, RemoteOp};

use crate::Result;
use crate::model::{Keyset, Status};

/// Which values to include when loading a remote keyset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every value regardless of status
    #[default]
    Any,
    ApprovedOnly,
    /// Unapproved values and anything reviewed since
    UnapprovedOrBetter,
}

impl StatusFilter {
    pub fn admits(self, status: Status) -> bool {
        match self {
            StatusFilter::Any | StatusFilter::UnapprovedOrBetter => true,
            StatusFilter::ApprovedOnly => status == Status::Approved,
        }
    }
}

/// Operations the sync engine needs from a remote translation store.
///
/// Implementations are used from a single thread; `&self` methods may rely
/// on interior mutability.
pub trait RemoteStore {
    /// Names of all keysets on the remote.
    fn list(&self) -> Result<Vec<String>>;

    /// Create an empty keyset. Fails if it already exists.
    fn create(&self, name: &str) -> Result<()>;

    /// Load a keyset, keeping only values admitted by `filter`.
    fn load_keyset(&self, name: &str, filter: StatusFilter) -> Result<Keyset>;

    /// Replace the stored keyset with the same name wholesale.
    fn replace(&self, keyset: &Keyset) -> Result<()>;

    /// Delete a keyset.
    fn drop_keyset(&self, name: &str) -> Result<()>;
}

pub(crate) fn apply_filter(mut keyset: Keyset, filter: StatusFilter) -> Keyset {
    if filter != StatusFilter::Any {
        keyset.retain_values(|value| filter.admits(value.status));
    }
    keyset
}
