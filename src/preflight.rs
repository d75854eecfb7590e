//! Startup configuration validation.
//!
//! These checks run before the first backend call so common mistakes surface
//! as actionable errors instead of raw connection failures.

use crate::config::Config;

/// Validate that the resolved configuration can be used for requests.
pub fn validate_config(config: &Config) -> Result<(), String> {
    validate_base_url(&config.ollama_url)?;
    validate_model_name(&config.model)
}

fn validate_base_url(raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(
            "No backend URL configured. Set `ollama_url` in termo.toml or TERMO_OLLAMA_URL."
                .to_string(),
        );
    }

    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|err| format!("invalid ollama_url `{trimmed}`: {err}"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "invalid ollama_url `{trimmed}`: unsupported scheme `{other}` (expected http or https)"
            ));
        }
    }
    if parsed.host_str().is_none() {
        return Err(format!("invalid ollama_url `{trimmed}`: missing host"));
    }
    Ok(())
}

fn validate_model_name(model: &str) -> Result<(), String> {
    if model.trim().is_empty() {
        return Err(
            "No model configured. Set `model` in termo.toml or TERMO_MODEL.".to_string(),
        );
    }
    Ok(())
}
