//! Admin panel configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command line / environment overrides applied by `main`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AdminError, Result};

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_SECTIONS_PATH: &str = "/api/home-sections";

/// Runtime configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// Backend origin, e.g. `https://api.example.org`
    pub api_url: String,
    /// Origin prefixed to relative image paths. Falls back to `api_url`.
    pub image_base_url: Option<String>,
    /// Collection path of the home sections resource
    pub sections_path: String,
    /// No timeout is applied when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            image_base_url: None,
            sections_path: DEFAULT_SECTIONS_PATH.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AdminConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is used when present, otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Get the path where the config file is looked up by default
    ///
    /// - Linux: ~/.config/home-sections-admin/config.toml
    /// - macOS: ~/Library/Application Support/home-sections-admin/config.toml
    /// - Windows: %APPDATA%\home-sections-admin\config.toml
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("home-sections-admin");
        path.push("config.toml");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply command line / environment overrides on top of the loaded values
    pub fn with_overrides(mut self, api_url: Option<String>, image_base_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if image_base_url.is_some() {
            self.image_base_url = image_base_url;
        }
        self
    }

    /// Origin used to resolve relative image paths
    pub fn image_base_url(&self) -> &str {
        self.image_base_url.as_deref().unwrap_or(&self.api_url)
    }

    /// Absolute URL of the sections collection
    pub fn sections_endpoint(&self) -> String {
        let path = self.sections_path.trim_start_matches('/');
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
