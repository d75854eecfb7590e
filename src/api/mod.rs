//! HTTP client for Ollama-compatible generation backends.
//!
//! - `types`: `/api/generate` request/response payloads
//! - `client`: reqwest-backed transport

use crate::error::ApiError;
use async_trait::async_trait;

mod client;
mod types;

pub use client::OllamaClient;
pub use types::{GenerateRequest, GenerateResponse};

/// Minimal backend interface used by the inference layer.
///
/// Tests provide deterministic mock responses without network calls while
/// the production path uses [`OllamaClient`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;
}
