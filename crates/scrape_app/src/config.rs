//! Optional RON configuration file.
//!
//! ```ron
//! (
//!     relay_template: "https://corsproxy.io/?{url}",
//!     relay_enabled: true,
//!     connect_timeout_secs: None,
//!     request_timeout_secs: Some(30),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use scrape_engine::{
    EngineConfig, FetchSettings, RelayConfig, RelayTemplateError, DEFAULT_RELAY_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub relay_template: String,
    pub relay_enabled: bool,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            relay_template: DEFAULT_RELAY_TEMPLATE.to_string(),
            relay_enabled: true,
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error(transparent)]
    Relay(#[from] RelayTemplateError),
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        // Reject a bad template at startup rather than on the first relayed scrape.
        RelayConfig::new(config.relay_template.as_str())?;
        Ok(config)
    }

    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        Ok(EngineConfig {
            relay: RelayConfig::new(self.relay_template.as_str())?,
            fetch: FetchSettings {
                connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
                request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            },
        })
    }
}
