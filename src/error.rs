//! Unified error types.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the inference backend HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error (refused, DNS, timeout).
    Http(reqwest::Error),
    /// Non-2xx status from the backend.
    Status(u16, String),
    /// The backend answered 2xx but the envelope was not the expected JSON.
    Decode(String),
}

impl ApiError {
    /// HTTP status code for status errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code, _) => Some(*code),
            _ => None,
        }
    }

    /// User-facing message used when a generation request fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) => format!("Connection error: {e}"),
            Self::Status(code, _) => format!("Ollama API error: {code}"),
            Self::Decode(msg) => format!("Unexpected error: {msg}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        // Body decode failures surface through reqwest too, but they are not
        // transport problems.
        if e.is_decode() {
            return Self::Decode(e.to_string());
        }
        Self::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn status_error_user_message_names_the_code() {
        let e = ApiError::Status(500, "boom".into());
        assert_eq!(e.status_code(), Some(500));
        assert_eq!(e.user_message(), "Ollama API error: 500");
        assert_eq!(e.to_string(), "status 500: boom");
    }

    #[test]
    fn decode_error_user_message_is_generic() {
        let e = ApiError::Decode("expected value at line 1".into());
        assert_eq!(e.status_code(), None);
        assert_eq!(
            e.user_message(),
            "Unexpected error: expected value at line 1"
        );
    }
}
