//! Client for the spreadsheet-backed Apps Script store
//!
//! Two surfaces over the same wire contract:
//! - raw relay methods used by the proxy handlers, which forward bodies
//!   verbatim and wrap unparseable upstream responses as `{ok:false, raw}`;
//! - a typed [`Gateway`] implementation used by the record store, which
//!   deserializes into [`Certificate`] values and maps failures into
//!   [`GatewayError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use shared::models::Certificate;
use shared::store::{Gateway, GatewayError};

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// HTTP client for the upstream script service
#[derive(Clone)]
pub struct ScriptClient {
    client: Client,
    base_url: String,
}

impl ScriptClient {
    /// Create a client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    /// Create a client pointed at a custom URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET the full collection, parse-or-raw, relaying the upstream status
    pub async fn fetch_records(&self) -> AppResult<(u16, Value)> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("list request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("reading list response failed: {}", e)))?;

        Ok((status, parse_or_raw(text)))
    }

    /// POST an action envelope exactly as received from the frontend
    pub async fn forward_action(&self, envelope: &Value) -> AppResult<(u16, Value)> {
        let response = self
            .client
            .post(&self.base_url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("action request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("reading action response failed: {}", e)))?;

        Ok((status, parse_or_raw(text)))
    }

    /// Cheap reachability probe for the health endpoint
    pub async fn ping(&self) -> AppResult<()> {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        Ok(())
    }

    async fn post_action(&self, envelope: Value) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }
}

/// The upstream speaks JSON but makes no promises about it. Anything that
/// does not parse is wrapped so the frontend always receives JSON.
fn parse_or_raw(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or_else(|_| json!({ "ok": false, "raw": text }))
}

#[async_trait]
impl Gateway for ScriptClient {
    async fn list(&self) -> Result<Vec<Certificate>, GatewayError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<Certificate>>()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn create(&self, record: &Certificate) -> Result<Certificate, GatewayError> {
        let body = self
            .post_action(json!({ "action": "create", "data": record }))
            .await?;
        serde_json::from_value(body).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn update(&self, record: &Certificate) -> Result<Certificate, GatewayError> {
        let body = self
            .post_action(json!({ "action": "update", "data": record }))
            .await?;
        serde_json::from_value(body).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.post_action(json!({ "action": "delete", "id": id }))
            .await?;
        Ok(())
    }
}
