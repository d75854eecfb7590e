//! Inference client: natural language in, command descriptor out.
//!
//! Wraps a [`ModelClient`] with the two fixed prompts and maps every
//! transport outcome onto the caller-facing contract: generation yields a
//! descriptor or an [`ErrorResult`], explanation always yields text.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::{GenerateRequest, ModelClient, OllamaClient};
use crate::config::Config;
use crate::parser::parse_descriptor;
use crate::platform::Platform;
use crate::prompt::{render_explain_prompt, render_generate_prompt};
use crate::types::{ErrorResult, Generation};

/// Deadline for command generation requests.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);
/// Deadline for diagnostic explanation requests.
pub const EXPLAIN_TIMEOUT: Duration = Duration::from_secs(30);
/// Returned when the backend answered without a `response` field.
pub const MISSING_EXPLANATION: &str = "Could not generate explanation";

/// Session-facing inference interface.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Turn a natural-language request into a descriptor or an error.
    async fn generate(&self, request: &str) -> Generation;

    /// Advisory explanation of `command` and its failure output. Failures
    /// degrade to a placeholder string.
    async fn explain_error(&self, command: &str, error_output: &str) -> String;
}

/// Production [`Generator`] talking to an Ollama-compatible backend.
pub struct InferenceClient {
    client: Arc<dyn ModelClient>,
    model: String,
    platform: Platform,
}

impl InferenceClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            Arc::new(OllamaClient::new(config)),
            config.model.clone(),
            config.platform,
        )
    }

    pub fn with_client(client: Arc<dyn ModelClient>, model: String, platform: Platform) -> Self {
        Self {
            client,
            model,
            platform,
        }
    }

    pub async fn generate(&self, request: &str) -> Generation {
        let prompt = render_generate_prompt(self.platform, request);
        let request = GenerateRequest::new(self.model.clone(), prompt, GENERATE_TIMEOUT);
        let response = match self.client.generate(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "command generation failed");
                return Err(ErrorResult::new(err.user_message()));
            }
        };

        let raw = response.response.unwrap_or_default();
        let descriptor = parse_descriptor(&raw);
        if descriptor.command().trim().is_empty() {
            warn!("model produced an empty command");
            return Err(ErrorResult::new(
                "Unexpected error: model returned an empty command",
            ));
        }
        info!(
            command = descriptor.command(),
            safety = descriptor.safety_label(),
            "command generated"
        );
        Ok(descriptor)
    }

    pub async fn explain_error(&self, command: &str, error_output: &str) -> String {
        let prompt = render_explain_prompt(command, error_output);
        let request = GenerateRequest::new(self.model.clone(), prompt, EXPLAIN_TIMEOUT);
        match self.client.generate(&request).await {
            Ok(response) => response
                .response
                .unwrap_or_else(|| MISSING_EXPLANATION.to_string()),
            Err(err) => {
                warn!(error = %err, "explanation request failed");
                format!("Error getting explanation: {}", err.user_message())
            }
        }
    }
}

#[async_trait]
impl Generator for InferenceClient {
    async fn generate(&self, request: &str) -> Generation {
        InferenceClient::generate(self, request).await
    }

    async fn explain_error(&self, command: &str, error_output: &str) -> String {
        InferenceClient::explain_error(self, command, error_output).await
    }
}
