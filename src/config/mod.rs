//! Configuration management for replybar.
//!
//! The settings blob holds the user-facing switches and the persisted
//! whitelist of pinned replies. It round-trips losslessly through JSON in
//! the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::whitelist::WhitelistStore;

/// Default sustained-press duration (milliseconds) before a hold fires.
fn default_hold_duration() -> u64 {
    crate::input::DEFAULT_HOLD_MS
}

fn default_enabled() -> bool {
    true
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether the quick-reply UI (trigger button, bar, menu) is shown at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Long-press duration in milliseconds
    #[serde(default = "default_hold_duration")]
    pub hold_duration_ms: u64,

    /// Pinned replies shown in the always-visible bar
    #[serde(default)]
    pub whitelist: WhitelistStore,

    /// Where this config was loaded from; in-memory configs have no path
    /// and skip saving.
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            hold_duration_ms: default_hold_duration(),
            whitelist: WhitelistStore::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location. An unreadable or
    /// corrupt file yields defaults still bound to that path, plus the error
    /// to surface once; the next save then overwrites the bad file.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::config_path() {
            Ok(path) => Self::load_or_recover(&path),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Load from an explicit path, recovering from a bad file with defaults
    /// that keep the path so saving stays possible.
    pub fn load_or_recover(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (
                Self {
                    path: Some(path.to_path_buf()),
                    ..Self::default()
                },
                Some(err),
            ),
        }
    }

    /// Load configuration from an explicit path (defaults if absent).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.path = Some(path.to_path_buf());

        Ok(config)
    }

    /// An in-memory configuration that never touches disk (for tests).
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Save configuration back to where it was loaded from. A pathless
    /// (in-memory) config saves nowhere and reports success.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("replybar").join("config.json"))
    }

    /// Get the path to the quick-reply sets file read by the file-backed
    /// reply source.
    pub fn replies_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("replybar").join("replies.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_enabled_with_empty_whitelist() {
        let config = Config::default();
        assert!(config.enabled);
        assert_eq!(config.hold_duration_ms, 500);
        assert!(config.whitelist.is_empty());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.enabled);
        assert!(config.whitelist.is_empty());
    }

    #[test]
    fn save_and_reload_round_trips_whitelist_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::load_from(&path).unwrap();
        config.enabled = false;
        config.hold_duration_ms = 750;
        config.whitelist.add("Greetings", "Hi");
        config.whitelist.add("Farewells", "Bye");
        config.save().unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.enabled);
        assert_eq!(loaded.hold_duration_ms, 750);
        assert_eq!(loaded.whitelist, config.whitelist);
    }

    #[test]
    fn in_memory_config_save_is_a_no_op() {
        let mut config = Config::in_memory();
        config.whitelist.add("A", "x");
        config.save().unwrap();
    }

    #[test]
    fn corrupt_file_recovers_and_next_save_overwrites_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let (mut config, error) = Config::load_or_recover(&path);
        assert!(error.is_some());
        assert!(config.whitelist.is_empty());

        // The recovered config kept the path, so changes actually persist.
        config.whitelist.add("Greetings", "Hi");
        config.save().unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.whitelist.contains("Greetings", "Hi"));
    }

    #[test]
    fn partial_blob_fills_in_defaults() {
        let config: Config = serde_json::from_str("{\"enabled\": false}").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.hold_duration_ms, 500);
        assert!(config.whitelist.is_empty());
    }
}
