//! User settings.
//!
//! Settings live in `<config_dir>/sabor/settings.json`. Every field has a
//! default, so a missing or partial file is fine; an unreadable file falls
//! back to defaults with a warning. Command line flags override what the
//! file says.

use crate::constants::{DEFAULT_BIND, DEFAULT_PORT, STORAGE_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const APP_DIR: &str = "sabor";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where persisted page state lives; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Content file replacing the built-in page data
    pub content_path: Option<PathBuf>,
    /// Preview server bind address
    pub bind: String,
    /// Preview server port
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            content_path: None,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Default settings file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; missing file means defaults.
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Failed to read settings {:?}: {}", path, e);
                return Self::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("Invalid settings {:?}, using defaults: {}", path, e);
            Self::default()
        })
    }

    /// Directory holding persisted page state.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".sabor"))
    }

    /// Path of the file-backed store.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir().join(STORAGE_FILE)
    }

    /// `bind:port` for the preview server.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
