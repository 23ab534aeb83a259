//! The menu injector: attaches the "Recent Files" submenu to host menu
//! containers and turns row selections into load events.
//!
//! The injector holds its own state explicitly — current phase, the set
//! of injected containers, and their rendered submenus — rather than
//! relying on ambient module state. The host drives it through the
//! subscription contract in [`crate::event`]: a [`MenuNotice::MenuReady`]
//! for every container that appears or re-renders.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::config::MenuSettings;
use crate::error::{RecentsError, RecentsResult};
use crate::event::{HostEvent, LoadFilePayload, MenuNotice};
use crate::fsio::TextSource;
use crate::menu::render::{build_submenu, Submenu};
use crate::registry::RegistryClient;

/// Parses document text as a JSON board document.
fn parse_document(content: &str) -> RecentsResult<serde_json::Value> {
    serde_json::from_str(content).map_err(|e| RecentsError::Parse(e.to_string()))
}

/// Observation phase of the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectorState {
    /// Not yet observing; notices are ignored.
    Waiting,
    /// Consuming menu notices. Injection per container is tracked
    /// separately — multiple injected containers are legal, and a
    /// re-rendered container is simply injected again.
    Observing,
}

/// Injects and services the "Recent Files" submenu.
pub struct MenuInjector {
    registry: RegistryClient,
    source: Arc<dyn TextSource>,
    events: mpsc::UnboundedSender<HostEvent>,
    settings: MenuSettings,
    state: InjectorState,
    submenus: BTreeMap<String, Submenu>,
}

impl MenuInjector {
    /// Creates an injector in the [`InjectorState::Waiting`] phase.
    pub fn new(
        registry: RegistryClient,
        source: Arc<dyn TextSource>,
        events: mpsc::UnboundedSender<HostEvent>,
        settings: MenuSettings,
    ) -> Self {
        Self {
            registry,
            source,
            events,
            settings,
            state: InjectorState::Waiting,
            submenus: BTreeMap::new(),
        }
    }

    /// Starts observing menu notices: Waiting → Observing.
    pub fn observe(&mut self) {
        self.state = InjectorState::Observing;
    }

    /// Current observation phase.
    #[must_use]
    pub fn state(&self) -> InjectorState {
        self.state
    }

    /// Whether a submenu has been injected into `container`.
    #[must_use]
    pub fn is_injected(&self, container: &str) -> bool {
        self.submenus.contains_key(container)
    }

    /// Containers currently carrying an injected submenu, sorted.
    #[must_use]
    pub fn injected_containers(&self) -> Vec<&str> {
        self.submenus.keys().map(String::as_str).collect()
    }

    /// The rendered submenu for `container`, if injected.
    #[must_use]
    pub fn submenu(&self, container: &str) -> Option<&Submenu> {
        self.submenus.get(container)
    }

    /// Handles a "menu appeared" notice.
    ///
    /// Injects when the container qualifies: it carries an Open action,
    /// does not already hold a recents item, and has not been injected
    /// before. The recent-files list is re-fetched from the registry on
    /// every injection — the menu is read-through, never cached.
    ///
    /// Returns `true` when a submenu was injected.
    pub async fn handle_menu_ready(&mut self, notice: &MenuNotice) -> bool {
        if self.state != InjectorState::Observing {
            tracing::debug!("Menu notice ignored: injector not observing");
            return false;
        }

        let MenuNotice::MenuReady {
            container,
            has_open_action,
            has_recent_item,
        } = notice;

        // Presence guard: re-entrant detection must not double-inject.
        if *has_recent_item || self.submenus.contains_key(container) {
            tracing::debug!("Container {container} already has a recents item");
            return false;
        }
        if !*has_open_action {
            tracing::debug!("Container {container} has no Open action; skipping");
            return false;
        }

        let entries = self.registry.recent_files().await;
        let submenu = build_submenu(&entries, Utc::now(), &self.settings);
        tracing::debug!(
            "Injected recent-files submenu into {container} ({} rows)",
            submenu.rows().len()
        );
        self.submenus.insert(container.clone(), submenu);
        true
    }

    /// Reveals the submenu for `container`. Unknown containers are
    /// ignored. No debounce: rapid enter/leave cycles toggle freely.
    pub fn hover_enter(&mut self, container: &str) {
        if let Some(submenu) = self.submenus.get_mut(container) {
            submenu.set_visible(true);
        }
    }

    /// Hides the submenu for `container`.
    pub fn hover_leave(&mut self, container: &str) {
        if let Some(submenu) = self.submenus.get_mut(container) {
            submenu.set_visible(false);
        }
    }

    /// Handles selection of the row carrying `path` in `container`.
    ///
    /// Reads the file through the filesystem collaborator, parses it as
    /// a JSON document, and emits exactly one [`HostEvent::LoadFile`].
    /// Read and parse failures are logged and emit nothing; the user
    /// retries by selecting again.
    pub async fn select(&self, container: &str, path: &str) {
        let Some(submenu) = self.submenus.get(container) else {
            tracing::debug!("Selection in unknown container {container}");
            return;
        };
        if submenu.row_for_path(path).is_none() {
            tracing::debug!("Selection of unknown row {path} in {container}");
            return;
        }

        let content = match self.source.read_to_string(Path::new(path)).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to load recent file {path}: {e}");
                return;
            }
        };

        let data = match parse_document(&content) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to load recent file {path}: {e}");
                return;
            }
        };

        let payload = LoadFilePayload {
            data,
            file_path: path.to_string(),
        };
        if self.events.send(HostEvent::LoadFile(payload)).is_err() {
            tracing::debug!("Host event channel closed; dropping load event");
        }
    }

    /// Runs the injector against a stream of menu notices.
    ///
    /// Calls [`Self::observe`] and then consumes notices until the
    /// channel closes. There is no explicit cancellation: the stream
    /// lives as long as the host page, and tearing down the sender ends
    /// the loop.
    pub async fn run(&mut self, mut notices: mpsc::UnboundedReceiver<MenuNotice>) {
        self.observe();
        while let Some(notice) = notices.recv().await {
            self.handle_menu_ready(&notice).await;
        }
    }
}
