//! Low-level HTTP transport for the agent bank API
//!
//! One network round trip per call: the configured API key is attached as an
//! `Api-Key` authorization header, the endpoint is joined onto the configured
//! base address, and the response is classified into the error taxonomy.
//! This layer never retries.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{Error, Result};

#[derive(Clone, Debug)]
pub struct ApiRequestor {
    config: Arc<RwLock<ClientConfig>>,
    client: Client,
}

impl ApiRequestor {
    pub fn new(config: Arc<RwLock<ClientConfig>>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn get(&self, endpoint: &str, query: Option<&[(&str, &str)]>) -> Result<Value> {
        self.request(Method::GET, endpoint, query, None, None).await
    }

    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, endpoint, None, Some(body), None)
            .await
    }

    pub async fn delete(&self, endpoint: &str, body: &Value) -> Result<Value> {
        self.request(Method::DELETE, endpoint, None, Some(body), None)
            .await
    }

    /// Perform one request against the configured base address.
    ///
    /// Caller-supplied headers are merged over the defaults; they may
    /// override the authorization value but cannot remove the header.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value> {
        // Snapshot the config up front so key/base changes apply on the next call
        let (api_key, api_base, timeout_seconds) = {
            let config = self.config.read().unwrap_or_else(|e| e.into_inner());
            (
                config.api_key.clone(),
                config.api_base.clone(),
                config.request_timeout_seconds,
            )
        };

        let api_key = api_key.ok_or(Error::ApiKeyNotSet)?;

        let endpoint = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };
        let url = format!("{}{}", api_base.trim_end_matches('/'), endpoint);

        let mut headers = HeaderMap::new();
        let auth_value =
            HeaderValue::from_str(&format!("Api-Key {}", api_key)).map_err(|_| Error::Validation {
                field: "api_key".to_string(),
                reason: "contains characters not permitted in an HTTP header".to_string(),
            })?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = extra_headers {
            for (name, value) in extra.iter() {
                headers.insert(name, value.clone());
            }
        }

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(headers)
            .timeout(Duration::from_secs(timeout_seconds));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("{} {}", method, url);

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport { reason: e.to_string() })?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(Error::Authentication);
        }
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Server {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| Error::Protocol {
            reason: format!("response body is not valid JSON: {}", e),
        })
    }
}
