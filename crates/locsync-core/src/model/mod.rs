//! In-memory resource model
//!
//! A [`Keyset`] is rebuilt from durable state at the start of every
//! operation and never cached across operations.

mod key;
mod keyset;

pub use key::{Key, Status, Value};
pub use keyset::{Keyset, MergeCounts};
