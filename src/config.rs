// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[api]` - Photo service endpoint and default event key
//! - `[display]` - Theme selection
//!
//! # Path Resolution
//!
//! The config file location can be customized:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `PHOTOWALL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! A missing file yields defaults; a malformed file yields defaults plus a
//! warning string for the caller to log, so startup never fails on config.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "PHOTOWALL_CONFIG_DIR";

/// Color theme for the application chrome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Photo service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Service base URL; the compiled default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Event key to load when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_key: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Chrome theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeChoice>,
}

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Resolves the directory holding the config file.
///
/// Order: explicit override, `PHOTOWALL_CONFIG_DIR`, platform config dir.
pub fn config_dir(override_dir: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut dir| {
        dir.push("photowall");
        dir
    })
}

/// Loads the configuration, never failing.
///
/// Returns the config plus an optional warning describing why defaults were
/// substituted (unreadable or malformed file).
pub fn load(override_dir: Option<&str>) -> (Config, Option<String>) {
    let Some(dir) = config_dir(override_dir) else {
        return (Config::default(), None);
    };

    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
