//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Source discovery and
//! precedence handling live in `loader`, `sources`, and `env`.

use serde::Deserialize;

use super::defaults::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use crate::platform::Platform;

/// Top-level runtime configuration, resolved once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the inference backend (no trailing slash required).
    pub ollama_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Host shell family.
    pub platform: Platform,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            platform: Platform::detect(),
            display: DisplayConfig::default(),
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Values supplied directly on the command line. These win over every
/// other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ollama_url: Option<String>,
    pub model: Option<String>,
    pub no_color: bool,
}

/// On-disk TOML shape. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub ollama_url: Option<String>,
    pub model: Option<String>,
    pub display: DisplayConfig,
}
