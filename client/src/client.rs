//! Top-level client handle owning the configuration and the transport.

use std::sync::{Arc, RwLock};
use tracing::info;

use crate::config::ClientConfig;
use crate::errors::Result;
use crate::requestor::ApiRequestor;

/// Handle for the agent bank API.
///
/// Cheap to clone; clones share the same configuration, so a key or base
/// address change through any handle is seen by all of them on their next
/// request. Resource operations live in `impl` blocks in the `agent` and
/// `population` modules.
#[derive(Clone)]
pub struct AgentBankClient {
    config: Arc<RwLock<ClientConfig>>,
    requestor: ApiRequestor,
}

impl AgentBankClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let config = Arc::new(RwLock::new(config));
        let requestor = ApiRequestor::new(config.clone());
        Self { config, requestor }
    }

    /// Build a client from a TOML configuration file.
    pub async fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ClientConfig::load_from_file(path).await?;
        Ok(Self::with_config(config))
    }

    /// Replace the API key; takes effect on the next request.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        config.api_key = Some(api_key.into());
    }

    /// Replace the base address; takes effect on the next request.
    pub fn set_api_base(&self, api_base: impl Into<String>) {
        let api_base = api_base.into();
        info!("API base set to {}", api_base);
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        config.api_base = api_base;
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub(crate) fn requestor(&self) -> &ApiRequestor {
        &self.requestor
    }
}
