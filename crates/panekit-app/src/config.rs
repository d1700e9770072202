//! Application configuration.

use std::path::{Path, PathBuf};

use panekit_core::Theme;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Window and theme settings, read from a JSON file.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Theme JSON file. The built-in theme is used when absent.
    pub theme: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "panekit".to_string(),
            width: 800,
            height: 600,
            theme: None,
        }
    }
}

impl AppConfig {
    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Config from command-line arguments (program name already skipped).
    ///
    /// The first argument, if any, is the config file path.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> AppResult<Self> {
        match args.next() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the theme this config names.
    pub fn load_theme(&self) -> AppResult<Theme> {
        match &self.theme {
            Some(path) => Ok(Theme::load(path)?),
            None => Ok(Theme::default()),
        }
    }
}
