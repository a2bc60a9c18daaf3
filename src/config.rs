//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (e.g. `~/.config/itembank/config.yaml`) and includes:
//! - The data service URL and request timeout
//! - Content-area selection policy and the second range metric
//! - Default page size and filter persistence settings

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::controller::ListOptions;
use crate::error::{ExplorerError, Result};
use crate::storage::{FileStorage, FilterStore};
use crate::types::{ContentAreaMode, PageSize, SecondMetric};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "ITEMBANK_CONFIG";

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "ITEMBANK_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the item-bank data service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default)]
    pub content_area_mode: ContentAreaMode,

    #[serde(default)]
    pub second_metric: SecondMetric,

    #[serde(default)]
    pub default_page_size: PageSize,

    /// Remember filter selections between sessions
    #[serde(default = "default_persist_filters")]
    pub persist_filters: bool,

    /// Where saved filters live; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_persist_filters() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            content_area_mode: ContentAreaMode::default(),
            second_metric: SecondMetric::default(),
            default_page_size: PageSize::default(),
            persist_filters: default_persist_filters(),
            storage_dir: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "itembank").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the config file, or defaults if there is
    /// none, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_url = url.trim().to_string();
        }
    }

    /// Apply a command-line URL, which wins over file and environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ExplorerError::Config("api_url must not be empty".to_string()));
        }
        if self.request_timeout == 0 {
            return Err(ExplorerError::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            content_area_mode: self.content_area_mode,
            second_metric: self.second_metric,
            page_size: self.default_page_size,
        }
    }

    /// Filter store for this configuration. Falls back to memory when
    /// persistence is off or no data directory can be determined.
    pub fn filter_store(&self) -> FilterStore {
        if !self.persist_filters {
            return FilterStore::in_memory();
        }
        match self.storage_dir.clone().or_else(FileStorage::default_dir) {
            Some(dir) => FilterStore::new(Arc::new(FileStorage::new(dir))),
            None => {
                warn!("no data directory available, filters will not be saved");
                FilterStore::in_memory()
            }
        }
    }
}
