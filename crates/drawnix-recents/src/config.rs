//! Integration settings loaded from a TOML file.
//!
//! All fields have defaults so the integration works without a config
//! file. Call [`Settings::load`] to read from a TOML path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecentsError, RecentsResult};

/// Top-level settings for the recent-files integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub menu: MenuSettings,
}

impl Settings {
    /// Loads settings from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`RecentsError::NotFound`] if the file does not exist.
    /// - [`RecentsError::PermissionDenied`] if the file is not readable.
    /// - [`RecentsError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> RecentsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RecentsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                RecentsError::PermissionDenied(path.to_path_buf())
            }
            _ => RecentsError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| RecentsError::ConfigParse(e.to_string()))
    }
}

/// Backing-store preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Maximum number of entries kept in the recent-files list.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Drop entries whose path no longer exists when loading the list.
    #[serde(default = "default_true")]
    pub prune_missing: bool,
    /// File name of the persisted list inside the app data directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            prune_missing: true,
            store_file: default_store_file(),
        }
    }
}

/// Submenu display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSettings {
    /// chrono format string for entries older than a week.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Character budget for the visually truncated path row.
    #[serde(default = "default_path_display_width")]
    pub path_display_width: usize,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            path_display_width: default_path_display_width(),
        }
    }
}

fn default_max_entries() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_store_file() -> String {
    "recent_files.json".to_string()
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_path_display_width() -> usize {
    40
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_registry_settings() {
        let settings = Settings::default();

        assert_eq!(settings.registry.max_entries, 10);
        assert!(settings.registry.prune_missing);
        assert_eq!(settings.registry.store_file, "recent_files.json");
    }

    #[test]
    fn default_menu_settings() {
        let settings = Settings::default();

        assert_eq!(settings.menu.date_format, "%-m/%-d/%Y");
        assert_eq!(settings.menu.path_display_width, 40);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[registry]
max_entries = 5
prune_missing = false
store_file = "mru.json"

[menu]
date_format = "%Y-%m-%d"
path_display_width = 60
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.registry.max_entries, 5);
        assert!(!settings.registry.prune_missing);
        assert_eq!(settings.registry.store_file, "mru.json");
        assert_eq!(settings.menu.date_format, "%Y-%m-%d");
        assert_eq!(settings.menu.path_display_width, 60);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[registry]
max_entries = 3
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.registry.max_entries, 3);
        assert!(settings.registry.prune_missing);
        assert_eq!(settings.menu.path_display_width, 40);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "").unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.registry.max_entries, 10);
        assert_eq!(settings.menu.date_format, "%-m/%-d/%Y");
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Settings::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), RecentsError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "not valid [[[toml").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result.unwrap_err(), RecentsError::ConfigParse(_)));
    }

    #[test]
    fn settings_is_clone_and_debug() {
        let settings = Settings::default();
        let cloned = settings.clone();
        assert_eq!(cloned.registry.max_entries, settings.registry.max_entries);
        let debug = format!("{:?}", settings);
        assert!(debug.contains("Settings"));
    }
}
