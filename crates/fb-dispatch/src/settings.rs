//! Persistent plugin settings.
//!
//! Stored as JSON under the user's config directory
//! (`<config>/fig-bridge/settings.json`). Saves go through a temp file and
//! a rename so a crash never leaves a half-written file behind.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SERVER_PORT: u16 = 3055;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Port of the relay server the UI connects to.
    pub server_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Settings {
    /// `<config dir>/fig-bridge/settings.json`, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fig-bridge").join("settings.json"))
    }

    /// Load settings from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("No settings at {path:?}, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        log::info!("Loaded settings from {path:?}");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}
