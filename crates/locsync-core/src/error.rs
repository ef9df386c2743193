//! Error types for locsync-core

use std::path::PathBuf;

/// Result type for locsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in locsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration parsed but is not usable
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Malformed `.strings` content
    #[error("Failed to parse {path} at line {line}: {message}")]
    StringsParse {
        path: String,
        line: usize,
        message: String,
    },

    /// Remote keyset does not exist
    #[error("Remote keyset not found: {name}")]
    RemoteKeysetNotFound { name: String },

    /// Remote keyset already exists
    #[error("Remote keyset already exists: {name}")]
    RemoteKeysetExists { name: String },

    /// An external localization tool failed
    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },

    /// Invalid glob in the file patterns
    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Operation inside a transaction failed; nothing was committed
    #[error("Transaction '{name}' failed: {source}")]
    TransactionFailed {
        name: String,
        #[source]
        source: Box<Error>,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from locsync-fs
    #[error(transparent)]
    Fs(#[from] locsync_fs::Error),

    /// Git error from locsync-git
    #[error(transparent)]
    Git(#[from] locsync_git::Error),

    /// Directory walk error
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Innermost error, looking through transaction wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::TransactionFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
