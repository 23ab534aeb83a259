//! Recent-files backing store.
//!
//! [`RecentStore`] is the invoke-style boundary the registry facade calls
//! into: four operations, each of which may fail. [`json::JsonStore`] is
//! the shipped implementation, persisting the list as a JSON file in the
//! app data directory. [`list::RecentList`] holds the pure MRU semantics
//! (dedup by path, MRU-first order, bounded capacity) so they can be
//! tested without touching disk.

pub mod entry;
pub mod json;
pub mod list;

use std::path::Path;

use async_trait::async_trait;

use crate::error::RecentsResult;
use crate::store::entry::RecentFileEntry;

/// The four remote operations the registry client wraps.
///
/// Implementations own ordering and deduplication; callers treat the
/// returned sequence as already ordered most-recently-used first.
#[async_trait]
pub trait RecentStore: Send + Sync {
    /// Returns the current recent-files list, MRU first.
    async fn list(&self) -> RecentsResult<Vec<RecentFileEntry>>;

    /// Records `path` as most recently used, with an optional preview
    /// payload. Re-adding an existing path refreshes its position.
    async fn add(&self, path: &Path, preview: Option<String>) -> RecentsResult<()>;

    /// Removes the entry for `path`, if present.
    async fn remove(&self, path: &Path) -> RecentsResult<()>;

    /// Removes all entries.
    async fn clear(&self) -> RecentsResult<()>;
}
