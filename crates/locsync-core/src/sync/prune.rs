//! Orphan pruning of remote keysets

use std::collections::BTreeSet;

use crate::model::Keyset;

/// What the caller must do with a remote keyset after pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneOutcome {
    /// No key was removed; no remote write.
    Unchanged,
    /// Some keys were removed; replace the remote keyset.
    Replace { removed: usize },
    /// Every key was removed; delete the remote keyset.
    Delete { removed: usize },
}

impl PruneOutcome {
    pub fn removed(&self) -> usize {
        match self {
            PruneOutcome::Unchanged => 0,
            PruneOutcome::Replace { removed } | PruneOutcome::Delete { removed } => *removed,
        }
    }
}

/// Remove every key of `remote` whose name is not in `authoritative`.
///
/// An emptied keyset must be deleted rather than stored empty.
pub fn prune_orphans(remote: &mut Keyset, authoritative: &BTreeSet<String>) -> PruneOutcome {
    let removed = remote.retain_names(authoritative);
    if removed == 0 {
        PruneOutcome::Unchanged
    } else if remote.is_empty() {
        PruneOutcome::Delete { removed }
    } else {
        PruneOutcome::Replace { removed }
    }
}
