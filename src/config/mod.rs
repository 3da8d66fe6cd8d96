// SPDX-License-Identifier: MPL-2.0
//! This module handles the notifier configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_notify::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_timeout_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_timeout_ms, Some(5000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::{
    DEFAULT_CONTAINER_ID, DEFAULT_FADE_DELAY_MS, DEFAULT_KIND, DEFAULT_TIMEOUT_MS,
    MAX_FADE_DELAY_MS, MAX_TIMEOUT_MS,
};

use crate::error::Result;
use crate::notifications::NotifierSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastNotify";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub default_kind: Option<String>,
    #[serde(default)]
    pub default_timeout_ms: Option<u64>,
    #[serde(default)]
    pub fade_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_id: Some(DEFAULT_CONTAINER_ID.to_string()),
            default_kind: Some(DEFAULT_KIND.to_string()),
            default_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            fade_delay_ms: Some(DEFAULT_FADE_DELAY_MS),
        }
    }
}

impl Config {
    /// Resolves the stored values into notifier settings.
    ///
    /// Missing fields take their defaults; out-of-range durations are clamped.
    #[must_use]
    pub fn notifier_settings(&self) -> NotifierSettings {
        let timeout_ms = self.default_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        let fade_ms = self.fade_delay_ms.unwrap_or(DEFAULT_FADE_DELAY_MS);

        if timeout_ms > MAX_TIMEOUT_MS {
            tracing::warn!(timeout_ms, max = MAX_TIMEOUT_MS, "clamping default timeout");
        }
        if fade_ms > MAX_FADE_DELAY_MS {
            tracing::warn!(fade_ms, max = MAX_FADE_DELAY_MS, "clamping fade delay");
        }

        NotifierSettings {
            container_id: self
                .container_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_string()),
            default_kind: self
                .default_kind
                .clone()
                .unwrap_or_else(|| DEFAULT_KIND.to_string()),
            default_timeout: Duration::from_millis(timeout_ms.min(MAX_TIMEOUT_MS)),
            fade_delay: Duration::from_millis(fade_ms.min(MAX_FADE_DELAY_MS)),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
