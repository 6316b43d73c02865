//! Assisted strategy
//!
//! Sends the raw text to an external extraction provider and expects a JSON
//! object with keys `order_code`, `customer_name` and `phone` back. The
//! caller decides what to do on failure; this client only reports it.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

const INSTRUCTION: &str = "Extract the retail order reference from the text. \
    Reply with a JSON object with keys order_code, customer_name and phone; \
    use null for anything not present.";

#[derive(Debug, Clone)]
pub struct AssistedClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

impl AssistedClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Ask the provider for structured fields out of free text.
    pub async fn extract(&self, text: &str) -> Result<serde_json::Value, ExtractError> {
        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "instruction": INSTRUCTION, "text": text }))
            .timeout(self.timeout)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ExtractError::Status(resp.status()));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ExtractError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ExtractError::Malformed("expected a JSON object".into()));
        }
        Ok(value)
    }
}
