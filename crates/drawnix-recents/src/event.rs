//! Notification channel between the host shell and the menu injector.
//!
//! The host translates its own UI lifecycle into [`MenuNotice`]s, which
//! the injector consumes, and the injector answers with [`HostEvent`]s
//! the host is expected to act on. Both directions are plain data, so
//! tests can drive the injector with a fake "menu appeared" notice and
//! assert on emitted events without a real host application.

use serde::{Deserialize, Serialize};

/// Name of the load event as dispatched into the host document.
pub const LOAD_FILE_EVENT: &str = "drawnix-load-file";

/// A notification the host sends to the injector.
///
/// Notices flow **host → injector**. The injector never creates notices
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNotice {
    /// A menu container appeared (or re-rendered) in the host UI.
    MenuReady {
        /// Stable identifier for the container.
        container: String,
        /// Whether the container holds an "Open" action.
        has_open_action: bool,
        /// Whether a "Recent Files" item is already present.
        has_recent_item: bool,
    },
}

/// Payload of the load event raised after a successful recent-file
/// selection. Serializes with camelCase keys to match the DOM event
/// detail (`{ data, filePath }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFilePayload {
    /// The parsed document.
    pub data: serde_json::Value,
    /// Full path the document was read from.
    pub file_path: String,
}

/// An event the injector sends back to the host.
///
/// Events flow **injector → host**, exactly once per successful action.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Load the carried document into the drawing application.
    LoadFile(LoadFilePayload),
}
