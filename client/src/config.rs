//! Client configuration: API credential, base address and request timeout.
//!
//! The configuration is an explicit object rather than process-global state;
//! the embedding application may mutate it at any time through the client
//! handle and the change is picked up by the next request.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::constants::defaults;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as `Authorization: Api-Key <key>`; required before any call
    pub api_key: Option<String>,

    /// Base address the endpoint paths are joined onto
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Timeout for a single HTTP round trip, independent of task wait deadlines
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_api_base() -> String {
    defaults::API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    defaults::REQUEST_TIMEOUT_SECONDS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path).await.map_err(|e| Error::Config {
            reason: format!("Failed to read config {}: {}", path.display(), e),
        })?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config {}: {}", path.display(), e),
        })?;

        info!("Loaded client config from {}", path.display());
        Ok(config)
    }
}
