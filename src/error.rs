//! Error types for scaffold smoke verification.
//!
//! Check failures are not errors: a missing directory is reported through
//! the [`crate::report::SmokeReport`]. Errors cover environmental faults
//! only (unreadable config, malformed TOML, I/O).

use std::path::PathBuf;

/// Result type alias for smoke operations.
pub type Result<T> = std::result::Result<T, SmokeError>;

/// Smoke verification errors.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Project root does not exist or is not a directory.
    #[error("project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Report serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = SmokeError::config("required_dirs cannot be empty");
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("required_dirs"));
    }

    #[test]
    fn test_root_not_found_error() {
        let err = SmokeError::RootNotFound(PathBuf::from("/no/such/project"));
        assert!(err.to_string().contains("project root not found"));
        assert!(err.to_string().contains("/no/such/project"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: SmokeError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_config_parse_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: SmokeError = parse_err.into();
        assert!(err.to_string().contains("config parse error"));
    }
}
