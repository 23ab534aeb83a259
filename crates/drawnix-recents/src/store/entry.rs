//! The recent-file record persisted by the backing store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recent-file record.
///
/// `path` is the unique key: the store keeps at most one entry per
/// distinct path. `last_modified` drives both the recency ordering and
/// the humanized time label in the submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFileEntry {
    /// Display name, derived from the final path component.
    pub name: String,
    /// Absolute filesystem location; unique key for the entry.
    pub path: String,
    /// Timestamp of last access or save.
    pub last_modified: DateTime<Utc>,
    /// Optional opaque preview payload attached at add time.
    pub preview: Option<String>,
}

impl RecentFileEntry {
    /// Builds an entry from a path string, deriving the display name
    /// from the final component. Falls back to `"Unknown"` when the
    /// path has no usable file name.
    pub fn new(path: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        let path = path.into();
        let name = std::path::Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown")
            .to_string();
        Self {
            name,
            path,
            last_modified,
            preview: None,
        }
    }

    /// Returns a copy of this entry carrying the given preview payload.
    #[must_use]
    pub fn with_preview(mut self, preview: Option<String>) -> Self {
        self.preview = preview;
        self
    }
}
