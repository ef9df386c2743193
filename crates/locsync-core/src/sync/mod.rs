//! Synchronization between the local tree and the remote store

mod engine;
mod prune;
mod report;
mod tracker;
mod verify;

pub use engine::{ALL_KEYSETS, SyncEngine, parse_selector};
pub use prune::{PruneOutcome, prune_orphans};
pub use report::{ExtractReport, LocalizeReport, PruneReport, PullReport, PushReport};
pub use tracker::ChangeTracker;
pub use verify::{LanguageCoverage, VerifyReport, verify};
