//! Client configuration.
//!
//! Configuration is stored in the user config directory
//! (`jotter/config.yaml`) and currently holds the backend server URL.
//! The `JOTTER_SERVER_URL` environment variable overrides the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JotterError, Result};

/// Base URL the original deployment serves from; used when neither the
/// environment nor the config file says otherwise.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the notes backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "jotter")
            .ok_or_else(|| JotterError::Config("cannot determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the user config file, or return default
    /// if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_path(&path)
    }

    /// Load configuration from a specific file path
    pub fn load_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_path(&path)
    }

    /// Save configuration to a specific file path
    pub fn save_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the backend URL: environment variable, then config file,
    /// then the built-in default
    pub fn server_url(&self) -> String {
        if let Ok(url) = env::var("JOTTER_SERVER_URL")
            && !url.is_empty()
        {
            return url;
        }

        self.server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Set the backend URL
    pub fn set_server_url(&mut self, url: String) {
        self.server_url = Some(url);
    }
}
