//! Environment and command-line override handling.

use super::{Config, ConfigOverrides};

/// Env var overriding the backend base URL.
pub const ENV_OLLAMA_URL: &str = "TERMO_OLLAMA_URL";
/// Env var overriding the model identifier.
pub const ENV_MODEL: &str = "TERMO_MODEL";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup(ENV_OLLAMA_URL)) {
        config.ollama_url = url;
    }
    if let Some(model) = non_empty(env_lookup(ENV_MODEL)) {
        config.model = model;
    }
    // https://no-color.org: any non-empty value disables color.
    if non_empty(env_lookup("NO_COLOR")).is_some() {
        config.display.color = false;
    }
}

pub(super) fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(url) = non_empty(overrides.ollama_url.clone()) {
        config.ollama_url = url;
    }
    if let Some(model) = non_empty(overrides.model.clone()) {
        config.model = model;
    }
    if overrides.no_color {
        config.display.color = false;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_values_replace_config_values() {
        let mut config = Config::default();
        let env = |name: &str| match name {
            ENV_OLLAMA_URL => Some("http://gpu-box:11434".to_string()),
            ENV_MODEL => Some("qwen2.5-coder".to_string()),
            _ => None,
        };
        apply_env_overrides(&mut config, &env);
        assert_eq!(config.ollama_url, "http://gpu-box:11434");
        assert_eq!(config.model, "qwen2.5-coder");
        assert!(config.display.color);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Config::default();
        let env = |name: &str| (name == ENV_MODEL).then(|| "   ".to_string());
        apply_env_overrides(&mut config, &env);
        assert_eq!(config.model, "llama3.1");
    }

    #[test]
    fn no_color_env_disables_color() {
        let mut config = Config::default();
        let env = |name: &str| (name == "NO_COLOR").then(|| "1".to_string());
        apply_env_overrides(&mut config, &env);
        assert!(!config.display.color);
    }

    #[test]
    fn cli_overrides_replace_config_values() {
        let mut config = Config::default();
        apply_cli_overrides(
            &mut config,
            &ConfigOverrides {
                ollama_url: Some("http://127.0.0.1:9999".to_string()),
                model: None,
                no_color: true,
            },
        );
        assert_eq!(config.ollama_url, "http://127.0.0.1:9999");
        assert_eq!(config.model, "llama3.1");
        assert!(!config.display.color);
    }
}
