//! In-memory MRU list with per-path deduplication.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::store::entry::RecentFileEntry;

/// Default capacity when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// An ordered recent-files list, most-recently-used first.
///
/// Invariants: at most one entry per distinct path, and never more than
/// `capacity` entries. Both are enforced by [`RecentList::push`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentList {
    files: VecDeque<RecentFileEntry>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for RecentList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecentList {
    /// Creates an empty list bounded to `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            files: VecDeque::new(),
            capacity,
        }
    }

    /// Rebuilds a list from already-ordered entries, e.g. after loading
    /// the persisted store file. Truncates to `capacity`; the entries are
    /// trusted to be deduplicated (the store wrote them that way).
    #[must_use]
    pub fn from_files(files: Vec<RecentFileEntry>, capacity: usize) -> Self {
        let mut files: VecDeque<RecentFileEntry> = files.into();
        if files.len() > capacity {
            files.truncate(capacity);
        }
        Self { files, capacity }
    }

    /// Adds `entry` at the front.
    ///
    /// An existing entry with the same path is removed first, so repeated
    /// pushes of the same path refresh its position and timestamp. The
    /// list is then truncated to capacity.
    pub fn push(&mut self, entry: RecentFileEntry) {
        self.files.retain(|f| f.path != entry.path);
        self.files.push_front(entry);
        if self.files.len() > self.capacity {
            self.files.truncate(self.capacity);
        }
    }

    /// Removes the entry with the given path, if present.
    pub fn remove(&mut self, path: &str) {
        self.files.retain(|f| f.path != path);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Drops entries whose path no longer exists on disk.
    pub fn prune_missing(&mut self) {
        self.files.retain(|f| Path::new(&f.path).exists());
    }

    /// Returns the entries in MRU order.
    #[must_use]
    pub fn files(&self) -> Vec<RecentFileEntry> {
        self.files.iter().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
