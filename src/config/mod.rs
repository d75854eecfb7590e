//! Configuration loading from TOML files and environment variables.
//!
//! Config is resolved in this order of precedence (highest wins):
//! 1. Command-line flags (`--ollama-url`, `--model`, `--no-color`)
//! 2. Environment variables (`TERMO_OLLAMA_URL`, `TERMO_MODEL`, `NO_COLOR`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./termo.toml in the current directory
//! 5. $XDG_CONFIG_HOME/termo/termo.toml (or ~/.config/termo/termo.toml)
//! 6. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use env::{ENV_MODEL, ENV_OLLAMA_URL};
pub use loader::{load_config, LoadedConfig};
pub use sources::{config_root_dir, default_global_config_path, ConfigSource};
pub use types::{Config, ConfigOverrides, DisplayConfig};

/// Documented default config file contents.
pub fn default_config_template() -> &'static str {
    defaults::DEFAULT_TERMO_CONFIG_TEMPLATE
}
