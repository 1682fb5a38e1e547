// src/config/settings.rs
//
// Application configuration
//
// Read from {CONFIG_DIR}/filmmap/config.json when present.
// FILMMAP_DATASET overrides the dataset location.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::TitleLengthPolicy;
use crate::error::AppResult;
use crate::integrations::{DatasetSource, FileDatasetSource, HttpDatasetSource};

pub const DATASET_ENV_VAR: &str = "FILMMAP_DATASET";
const DEFAULT_DATASET_PATH: &str = "data/films.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Location of the film dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetLocation {
    Url(String),
    Path(PathBuf),
}

impl DatasetLocation {
    /// URLs are recognised by their scheme; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DatasetLocation::Url(raw.to_string())
        } else {
            DatasetLocation::Path(PathBuf::from(raw))
        }
    }
}

impl Default for DatasetLocation {
    fn default() -> Self {
        DatasetLocation::Path(PathBuf::from(DEFAULT_DATASET_PATH))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetLocation,
    pub title_length_policy: TitleLengthPolicy,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetLocation::default(),
            title_length_policy: TitleLengthPolicy::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the user config directory and environment
    pub fn load() -> AppResult<Self> {
        let mut config = match get_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(DATASET_ENV_VAR) {
            config.dataset = DatasetLocation::parse(&raw);
        }

        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Build the dataset source this configuration points at
    pub fn dataset_source(&self) -> AppResult<Arc<dyn DatasetSource>> {
        match &self.dataset {
            DatasetLocation::Url(url) => {
                Ok(Arc::new(HttpDatasetSource::new(url, self.http_timeout())?))
            }
            DatasetLocation::Path(path) => Ok(Arc::new(FileDatasetSource::new(path.clone()))),
        }
    }
}

/// Get the config file path
///
/// Path structure: {CONFIG_DIR}/filmmap/config.json
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filmmap").join("config.json"))
}
