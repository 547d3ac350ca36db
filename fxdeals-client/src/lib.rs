//! # FX Deals Client SDK
//!
//! A typed Rust client for the FX Deals Warehouse API.

use fxdeals_types::{BatchResult, Deal, DealRequest, DealResponse};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Wire envelope for a batch; rows may be typed requests or raw JSON.
#[derive(Serialize)]
struct BatchBody<'a, T> {
    deals: &'a [T],
}

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// FX Deals API client.
pub struct FxDealsClient {
    base_url: String,
    http: Client,
}

impl FxDealsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Imports a single deal.
    pub async fn import_deal(&self, deal: &DealRequest) -> Result<DealResponse, ClientError> {
        self.post("/api/deals", deal).await
    }

    /// Imports a batch of deals.
    ///
    /// Fully accepted (201), partially accepted (207) and fully rejected (400)
    /// batches all come back as `Ok`; inspect the counts. An `Err` means the
    /// request itself was refused, e.g. an empty or oversized list.
    pub async fn import_batch<T: Serialize>(&self, deals: &[T]) -> Result<BatchResult, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/deals/batch", self.base_url))
            .json(&BatchBody { deals })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        let batch_status = matches!(
            status,
            StatusCode::CREATED | StatusCode::MULTI_STATUS | StatusCode::BAD_REQUEST
        );

        if batch_status {
            if let Ok(result) = serde_json::from_str::<BatchResult>(&body) {
                return Ok(result);
            }
        }
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Lists every stored deal, oldest first.
    pub async fn list_deals(&self) -> Result<Vec<Deal>, ClientError> {
        self.get("/api/deals").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Pulls a readable message out of an error body.
///
/// Prefers `message`, then the per-field `errors`, then the `error` title,
/// and falls back to the raw body.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return message.to_string();
    }

    if let Some(errors) = value.get("errors").and_then(|e| e.as_object()) {
        let fields: Vec<String> = errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg.as_str().unwrap_or_default()))
            .collect();
        if !fields.is_empty() {
            return fields.join("; ");
        }
    }

    value
        .get("error")
        .and_then(|e| e.as_str())
        .map(String::from)
        .unwrap_or_else(|| body.to_string())
}
