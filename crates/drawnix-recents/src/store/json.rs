//! JSON-file backed [`RecentStore`].
//!
//! Every operation is load-mutate-save against a single JSON file
//! (`recent_files.json` by default) in the app data directory. There is
//! no in-process cache: the menu re-fetches through the registry on each
//! injection, so the file is always the source of truth.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::RegistrySettings;
use crate::error::{RecentsError, RecentsResult};
use crate::store::entry::RecentFileEntry;
use crate::store::list::RecentList;
use crate::store::RecentStore;

/// Wire format of the persisted store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    files: Vec<RecentFileEntry>,
}

/// A [`RecentStore`] persisted as pretty-printed JSON on local disk.
#[derive(Debug, Clone)]
pub struct JsonStore {
    store_path: PathBuf,
    capacity: usize,
    prune_missing: bool,
}

impl JsonStore {
    /// Creates a store persisting to `store_path` with default settings.
    #[must_use]
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self::from_settings(store_path, &RegistrySettings::default())
    }

    /// Creates a store persisting to `store_path`, honouring the
    /// configured capacity and pruning behaviour.
    #[must_use]
    pub fn from_settings(store_path: impl Into<PathBuf>, settings: &RegistrySettings) -> Self {
        Self {
            store_path: store_path.into(),
            capacity: settings.max_entries,
            prune_missing: settings.prune_missing,
        }
    }

    /// Creates a store inside the app data directory, using the
    /// configured store file name. This is how the shell builds the
    /// shipped store.
    #[must_use]
    pub fn in_dir(data_dir: &Path, settings: &RegistrySettings) -> Self {
        Self::from_settings(data_dir.join(&settings.store_file), settings)
    }

    /// Path of the persisted JSON file.
    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Loads the persisted list. A missing file yields an empty list;
    /// entries whose path has vanished are pruned when configured.
    async fn load(&self) -> RecentsResult<RecentList> {
        if !self.store_path.exists() {
            return Ok(RecentList::new(self.capacity));
        }
        let content = fs::read_to_string(&self.store_path).await?;
        let parsed: StoreFile = serde_json::from_str(&content)
            .map_err(|e| RecentsError::BackingStore(format!("corrupt store file: {e}")))?;
        let mut list = RecentList::from_files(parsed.files, self.capacity);
        if self.prune_missing {
            list.prune_missing();
        }
        Ok(list)
    }

    /// Persists the list, creating parent directories as needed.
    async fn save(&self, list: &RecentList) -> RecentsResult<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let wire = StoreFile { files: list.files() };
        let content = serde_json::to_string_pretty(&wire)
            .map_err(|e| RecentsError::BackingStore(e.to_string()))?;
        fs::write(&self.store_path, content).await?;
        Ok(())
    }

    /// Builds the entry recorded for an add: name from the final path
    /// component, timestamp from the file's mtime.
    async fn entry_for(&self, path: &Path, preview: Option<String>) -> RecentsResult<RecentFileEntry> {
        if !path.exists() {
            return Err(RecentsError::NotFound(path.to_path_buf()));
        }
        let metadata = fs::metadata(path).await?;
        let last_modified: DateTime<Utc> = metadata.modified()?.into();
        Ok(RecentFileEntry::new(path.to_string_lossy(), last_modified).with_preview(preview))
    }
}

#[async_trait]
impl RecentStore for JsonStore {
    async fn list(&self) -> RecentsResult<Vec<RecentFileEntry>> {
        Ok(self.load().await?.files())
    }

    async fn add(&self, path: &Path, preview: Option<String>) -> RecentsResult<()> {
        let entry = self.entry_for(path, preview).await?;
        let mut list = self.load().await?;
        list.push(entry);
        self.save(&list).await
    }

    async fn remove(&self, path: &Path) -> RecentsResult<()> {
        let mut list = self.load().await?;
        list.remove(&path.to_string_lossy());
        self.save(&list).await
    }

    async fn clear(&self) -> RecentsResult<()> {
        self.save(&RecentList::new(self.capacity)).await
    }
}
