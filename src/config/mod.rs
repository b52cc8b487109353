// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional so that a hand-edited or partially written file
//! still loads; missing values fall back to the defaults in [`defaults`].

pub mod defaults;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ForYouLanding";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Light, dark, or follow the system.
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    /// Skip the smooth-scroll and reveal animations and the parallax effect.
    #[serde(default)]
    pub reduce_motion: Option<bool>,
    /// Enable the decorative hero parallax.
    #[serde(default)]
    pub parallax: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: Some(defaults::DEFAULT_THEME_MODE),
            reduce_motion: Some(defaults::DEFAULT_REDUCE_MOTION),
            parallax: Some(defaults::DEFAULT_PARALLAX),
        }
    }
}

impl Config {
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode.unwrap_or(defaults::DEFAULT_THEME_MODE)
    }

    #[must_use]
    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion.unwrap_or(defaults::DEFAULT_REDUCE_MOTION)
    }

    #[must_use]
    pub fn parallax(&self) -> bool {
        self.parallax.unwrap_or(defaults::DEFAULT_PARALLAX)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// A missing file (or an undeterminable config directory) yields defaults;
/// only a present-but-unreadable file is an error.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;
    toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Io(e.to_string()))?;
    }
    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, contents).map_err(|e| Error::Io(e.to_string()))
}
