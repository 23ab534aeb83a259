//! Error types for `drawnix-recents`.
//!
//! All fallible operations in this crate return [`RecentsResult<T>`],
//! which is an alias for `Result<T, RecentsError>`.
//!
//! Note that most errors never reach the host application: the registry
//! facade and the menu injector log and swallow failures at the boundary
//! (see [`crate::registry`] and [`crate::menu`]). The variants below exist
//! for the layers underneath, where errors still propagate with `?`.

use std::path::PathBuf;

/// Unified error type for the recent-files core.
///
/// Each variant captures just enough context for a log line or for a
/// caller to take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum RecentsError {
    /// The backing store failed to read or persist the recent-files list.
    #[error("backing store error: {0}")]
    BackingStore(String),

    /// The target file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A path handed to a registry operation was empty or otherwise unusable.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Document content failed to parse as JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to parse a TOML settings file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `drawnix-recents`.
pub type RecentsResult<T> = Result<T, RecentsError>;
