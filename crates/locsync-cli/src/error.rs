//! Error types for locsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from locsync-core
    #[error(transparent)]
    Core(#[from] locsync_core::Error),

    /// Error from locsync-fs
    #[error(transparent)]
    Fs(#[from] locsync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
