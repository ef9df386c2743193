//! Filesystem primitives for locsync
//!
//! Forward-slash path handling, atomic writes, content checksums and
//! extension-driven document loading.

pub mod checksum;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use document::{DocumentStore, Format};
pub use error::{Error, Result};
pub use path::NormalizedPath;
