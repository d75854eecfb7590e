//! Wire types for the `/api/generate` endpoint.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One non-streaming completion request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always `false`: the full completion is returned as one payload.
    pub stream: bool,
    /// Hard deadline for the whole request; not sent on the wire.
    #[serde(skip)]
    pub timeout: Duration,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, timeout: Duration) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            timeout,
        }
    }
}

/// Completion envelope. Only `response` is consumed; other fields the
/// backend sends (timings, context, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_without_timeout() {
        let req = GenerateRequest::new("llama3.1", "hi", Duration::from_secs(60));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"model": "llama3.1", "prompt": "hi", "stream": false})
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"model":"llama3.1","response":"ls","done":true,"total_duration":12}"#,
        )
        .unwrap();
        assert_eq!(parsed.response.as_deref(), Some("ls"));
    }

    #[test]
    fn response_field_is_optional() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(parsed.response, None);
    }
}
