//! reqwest transport for `POST {base_url}/api/generate`.

use super::types::{GenerateRequest, GenerateResponse};
use super::ModelClient;
use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Client for Ollama-compatible generation APIs.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.ollama_url)
    }

    /// Build a client pointed at an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            // Per-request deadlines are applied in `generate`.
            http: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Send one non-streaming generation request.
    ///
    /// The request deadline covers connect, send, and reading the whole body;
    /// on expiry the in-flight request is dropped.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(
            url = %url,
            model = %request.model,
            timeout_secs = request.timeout.as_secs(),
            prompt_len = request.prompt.len(),
            "dispatching generate request"
        );

        let response = self
            .http
            .post(&url)
            .timeout(request.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "generate request failed");
                ApiError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "backend returned non-success status");
            return Err(ApiError::Status(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str::<GenerateResponse>(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse Ollama response: {e}")))
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        OllamaClient::generate(self, request).await
    }
}
