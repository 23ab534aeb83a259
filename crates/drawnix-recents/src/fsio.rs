//! Filesystem collaborator and the tracked save/load pair.
//!
//! [`TextSource`] is the seam the menu injector reads documents through,
//! so tests can substitute a fake filesystem. The `*_with_tracking`
//! functions are the host-facing save/load operations that implicitly
//! record recency; the registry add is best-effort and never fails the
//! underlying I/O.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{RecentsError, RecentsResult};
use crate::preview;
use crate::registry::RegistryClient;

/// Character budget for the preview snippet attached on save.
const PREVIEW_MAX_CHARS: usize = 120;

/// Read-only text access to the filesystem.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`RecentsError::NotFound`] or
    /// [`RecentsError::PermissionDenied`] for the matching I/O failures,
    /// [`RecentsError::Io`] otherwise.
    async fn read_to_string(&self, path: &Path) -> RecentsResult<String>;
}

/// [`TextSource`] over the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFs;

#[async_trait]
impl TextSource for LocalFs {
    async fn read_to_string(&self, path: &Path) -> RecentsResult<String> {
        fs::read_to_string(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RecentsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                RecentsError::PermissionDenied(path.to_path_buf())
            }
            _ => RecentsError::Io(e),
        })
    }
}

/// Writes `content` to `path` and records the file as most recently
/// used, attaching a short content snippet as the preview payload.
///
/// The write and the recency add are atomic from the caller's point of
/// view: the add happens only after a successful write, and an add
/// failure never fails the save.
///
/// # Errors
///
/// Returns [`RecentsError::Io`] when the write itself fails.
pub async fn save_file_with_tracking(
    registry: &RegistryClient,
    path: &Path,
    content: &str,
) -> RecentsResult<()> {
    fs::write(path, content).await?;
    let snippet = preview::snippet(content, PREVIEW_MAX_CHARS);
    registry.add(path, Some(snippet)).await;
    Ok(())
}

/// Reads `path` as text and records the file as most recently used.
///
/// # Errors
///
/// Propagates the read error; the recency add is best-effort and only
/// attempted after a successful read.
pub async fn load_file_with_tracking(
    registry: &RegistryClient,
    path: &Path,
) -> RecentsResult<String> {
    let content = LocalFs.read_to_string(path).await?;
    registry.add(path, None).await;
    Ok(content)
}
