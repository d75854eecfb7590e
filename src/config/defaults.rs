//! Default configuration constants.

/// Embedded default `termo.toml` template printed by `termo --print-config`.
pub(super) const DEFAULT_TERMO_CONFIG_TEMPLATE: &str = include_str!("../templates/termo.toml");
/// Default Ollama-compatible backend base URL.
pub(super) const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Default model identifier sent with each generation request.
pub(super) const DEFAULT_MODEL: &str = "llama3.1";
/// Config file name used for local and global lookups.
pub(super) const CONFIG_FILE_NAME: &str = "termo.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "termo";
