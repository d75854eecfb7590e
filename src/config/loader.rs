//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::platform::Platform;

use super::env::{apply_cli_overrides, apply_env_overrides};
use super::sources::{config_root_dir, read_config_text_with_sources, ConfigSource};
use super::types::FileConfig;
use super::{Config, ConfigOverrides, DisplayConfig};

/// Configuration plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from disk, environment, and command-line overrides.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        overrides,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    overrides: &ConfigOverrides,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed);
    apply_env_overrides(&mut config, &env_lookup);
    apply_cli_overrides(&mut config, overrides);
    debug!(
        source = ?source,
        ollama_url = %config.ollama_url,
        model = %config.model,
        platform = %config.platform,
        "configuration resolved"
    );
    Ok(LoadedConfig { config, source })
}

fn resolve_file_config(parsed: FileConfig) -> Config {
    let defaults = Config::default();
    Config {
        ollama_url: parsed.ollama_url.unwrap_or(defaults.ollama_url),
        model: parsed.model.unwrap_or(defaults.model),
        platform: Platform::detect(),
        display: DisplayConfig {
            color: parsed.display.color,
        },
    }
}
