//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from local `./termo.toml`.
    Local,
    /// Config loaded from `<config root>/termo/termo.toml`.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; silently falling back would hide typos.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Resolve the per-user config root (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Return the default per-user config path (`~/.config/termo/termo.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn explicit_path_wins_and_must_exist() {
        let read = |path: &Path| {
            if path == Path::new("/tmp/custom.toml") {
                Ok("model = \"x\"".to_string())
            } else {
                Ok("model = \"local\"".to_string())
            }
        };
        let (text, source) =
            read_config_text_with_sources(Some("/tmp/custom.toml"), &read, &|| None).unwrap();
        assert_eq!(text, "model = \"x\"");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/tmp/custom.toml")));

        let err = read_config_text_with_sources(Some("/nope.toml"), &not_found, &|| None)
            .expect_err("explicit path must exist");
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn local_file_precedes_global_file() {
        let read = |path: &Path| {
            if path == Path::new("termo.toml") {
                Ok("local".to_string())
            } else {
                Ok("global".to_string())
            }
        };
        let (text, source) =
            read_config_text_with_sources(None, &read, &|| Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(text, "local");
        assert_eq!(source, ConfigSource::Local);
    }

    #[test]
    fn global_file_is_read_from_config_root() {
        let read = |path: &Path| {
            if path == Path::new("/cfg/termo/termo.toml") {
                Ok("global".to_string())
            } else {
                not_found(path)
            }
        };
        let (text, source) =
            read_config_text_with_sources(None, &read, &|| Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(text, "global");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/termo/termo.toml"))
        );
    }

    #[test]
    fn falls_back_to_defaults_when_nothing_found() {
        let (text, source) =
            read_config_text_with_sources(None, &not_found, &|| Some(PathBuf::from("/cfg")))
                .unwrap();
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }
}
