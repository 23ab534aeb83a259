//! View models for the "Recent Files" submenu.
//!
//! Rendering is pure: given a fetched entry list and a reference time,
//! [`build_submenu`] produces the rows the host draws. Entries render in
//! the order the store returned them; this layer never re-sorts.

use chrono::{DateTime, Utc};

use crate::config::MenuSettings;
use crate::store::entry::RecentFileEntry;
use crate::timefmt;

/// Label of the injected menu item itself.
pub const RECENT_FILES_LABEL: &str = "Recent Files";

/// Label of the single non-interactive row shown for an empty list.
pub const EMPTY_PLACEHOLDER: &str = "No recent files";

/// One row of the submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmenuRow {
    /// Non-interactive "no recent files" row.
    Placeholder,
    /// A selectable recent-file row.
    File {
        /// Display name.
        name: String,
        /// Humanized "time ago" label, fixed at render time.
        time_label: String,
        /// Visually truncated path for display.
        display_path: String,
        /// Full path, kept intact for the selection handler.
        path: String,
    },
}

impl SubmenuRow {
    /// Whether selecting this row does anything.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// The full path carried by a file row.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Placeholder => None,
        }
    }
}

/// A rendered submenu attached to one menu container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submenu {
    rows: Vec<SubmenuRow>,
    visible: bool,
}

impl Submenu {
    /// All rows, in render order.
    #[must_use]
    pub fn rows(&self) -> &[SubmenuRow] {
        &self.rows
    }

    /// Whether the submenu is currently revealed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Finds the interactive row carrying the given full path.
    #[must_use]
    pub fn row_for_path(&self, path: &str) -> Option<&SubmenuRow> {
        self.rows.iter().find(|r| r.path() == Some(path))
    }
}

/// Truncates `path` to at most `max_chars` characters for display,
/// ending in an ellipsis when cut. Truncation is visual only; callers
/// keep the full path alongside.
#[must_use]
pub fn truncate_display(path: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if path.chars().count() <= max_chars {
        return path.to_string();
    }
    let keep = max_chars - 1;
    let mut out: String = path.chars().take(keep).collect();
    out.push('…');
    out
}

/// Renders the submenu for the given entries.
///
/// An empty list yields exactly one placeholder row; otherwise one row
/// per entry, in the given order. The submenu starts hidden — hover
/// reveals it.
#[must_use]
pub fn build_submenu(
    entries: &[RecentFileEntry],
    now: DateTime<Utc>,
    settings: &MenuSettings,
) -> Submenu {
    if entries.is_empty() {
        return Submenu {
            rows: vec![SubmenuRow::Placeholder],
            visible: false,
        };
    }

    let rows = entries
        .iter()
        .map(|entry| SubmenuRow::File {
            name: entry.name.clone(),
            time_label: timefmt::format_relative(entry.last_modified, now, &settings.date_format),
            display_path: truncate_display(&entry.path, settings.path_display_width),
            path: entry.path.clone(),
        })
        .collect();

    Submenu {
        rows,
        visible: false,
    }
}
