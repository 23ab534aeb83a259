//! Best-effort facade over the recent-files store.
//!
//! The submenu is a convenience; a broken backing store must never block
//! or crash the host UI. Every boundary call here is isolated behind a
//! log-and-swallow policy: reads degrade to an empty list, writes degrade
//! to a no-op, and the caller is never handed an error.

use std::path::Path;
use std::sync::Arc;

use crate::error::{RecentsError, RecentsResult};
use crate::store::entry::RecentFileEntry;
use crate::store::RecentStore;

/// Rejects paths that cannot name a recent-file entry.
fn validate_path(path: &Path) -> RecentsResult<()> {
    if path.as_os_str().is_empty() {
        return Err(RecentsError::InvalidPath("empty path".to_string()));
    }
    Ok(())
}

/// Client-side facade over the four registry operations.
#[derive(Clone)]
pub struct RegistryClient {
    store: Arc<dyn RecentStore>,
}

impl RegistryClient {
    /// Wraps the given backing store.
    pub fn new(store: Arc<dyn RecentStore>) -> Self {
        Self { store }
    }

    /// Fetches the current recent-files list, MRU first.
    ///
    /// On store failure, logs and returns an empty list. Never errors.
    pub async fn recent_files(&self) -> Vec<RecentFileEntry> {
        match self.store.list().await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Failed to get recent files: {e}");
                Vec::new()
            }
        }
    }

    /// Records `path` as most recently used. Fire-and-forget: failures
    /// are logged and swallowed, empty paths are rejected up front.
    pub async fn add(&self, path: &Path, preview: Option<String>) {
        if let Err(e) = validate_path(path) {
            tracing::warn!("Ignoring add to recent files: {e}");
            return;
        }
        if let Err(e) = self.store.add(path, preview).await {
            tracing::warn!("Failed to add to recent files: {e}");
        }
    }

    /// Removes the entry for `path`. Same swallow policy as [`Self::add`].
    pub async fn remove(&self, path: &Path) {
        if let Err(e) = validate_path(path) {
            tracing::warn!("Ignoring remove from recent files: {e}");
            return;
        }
        if let Err(e) = self.store.remove(path).await {
            tracing::warn!("Failed to remove recent file: {e}");
        }
    }

    /// Clears the whole list. Same swallow policy as [`Self::add`].
    pub async fn clear(&self) {
        if let Err(e) = self.store.clear().await {
            tracing::warn!("Failed to clear recent files: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    /// In-memory store that can be switched into a failing mode.
    struct FakeStore {
        entries: Mutex<Vec<RecentFileEntry>>,
        failing: bool,
    }

    impl FakeStore {
        fn with_entries(entries: Vec<RecentFileEntry>) -> Self {
            Self {
                entries: Mutex::new(entries),
                failing: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
                failing: true,
            }
        }

        fn check(&self) -> RecentsResult<()> {
            if self.failing {
                Err(RecentsError::BackingStore("store offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecentStore for FakeStore {
        async fn list(&self) -> RecentsResult<Vec<RecentFileEntry>> {
            self.check()?;
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn add(&self, path: &Path, preview: Option<String>) -> RecentsResult<()> {
            self.check()?;
            let entry = RecentFileEntry::new(
                path.to_string_lossy(),
                Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            )
            .with_preview(preview);
            self.entries.lock().unwrap().insert(0, entry);
            Ok(())
        }

        async fn remove(&self, path: &Path) -> RecentsResult<()> {
            self.check()?;
            let path = path.to_string_lossy().to_string();
            self.entries.lock().unwrap().retain(|e| e.path != path);
            Ok(())
        }

        async fn clear(&self) -> RecentsResult<()> {
            self.check()?;
            self.entries.lock().unwrap().clear();
            Ok(())
        }
    }

    fn entry(path: &str) -> RecentFileEntry {
        RecentFileEntry::new(path, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn recent_files_returns_store_order() {
        let store = FakeStore::with_entries(vec![entry("/b"), entry("/a")]);
        let client = RegistryClient::new(Arc::new(store));

        let files = client.recent_files().await;
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }

    #[tokio::test]
    async fn recent_files_degrades_to_empty_on_store_failure() {
        let client = RegistryClient::new(Arc::new(FakeStore::failing()));

        let files = client.recent_files().await;
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn add_records_entry() {
        let store = Arc::new(FakeStore::with_entries(Vec::new()));
        let client = RegistryClient::new(store.clone());

        client.add(Path::new("/a.drawnix"), None).await;

        assert_eq!(store.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_failure_is_swallowed() {
        let client = RegistryClient::new(Arc::new(FakeStore::failing()));
        // Must not panic or surface anything.
        client.add(Path::new("/a.drawnix"), None).await;
    }

    #[tokio::test]
    async fn add_empty_path_never_reaches_store() {
        let store = Arc::new(FakeStore::with_entries(Vec::new()));
        let client = RegistryClient::new(store.clone());

        client.add(Path::new(""), None).await;

        assert!(store.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_entry() {
        let store = Arc::new(FakeStore::with_entries(vec![entry("/a"), entry("/b")]));
        let client = RegistryClient::new(store.clone());

        client.remove(Path::new("/a")).await;

        let remaining = store.entries.lock().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].path, "/b");
    }

    #[tokio::test]
    async fn remove_empty_path_never_reaches_store() {
        let store = Arc::new(FakeStore::with_entries(vec![entry("/a")]));
        let client = RegistryClient::new(store.clone());

        client.remove(Path::new("")).await;

        assert_eq!(store.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clear_empties_store() {
        let store = Arc::new(FakeStore::with_entries(vec![entry("/a")]));
        let client = RegistryClient::new(store.clone());

        client.clear().await;

        assert!(store.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_failure_is_swallowed() {
        let client = RegistryClient::new(Arc::new(FakeStore::failing()));
        client.clear().await;
    }

    // --- validate_path ---

    #[test]
    fn empty_path_is_invalid() {
        let err = validate_path(Path::new("")).unwrap_err();
        assert!(matches!(err, RecentsError::InvalidPath(_)));
        assert_eq!(err.to_string(), "invalid path: empty path");
    }

    #[test]
    fn non_empty_path_is_valid() {
        assert!(validate_path(Path::new("/a.drawnix")).is_ok());
    }
}
