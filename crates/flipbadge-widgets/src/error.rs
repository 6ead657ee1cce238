//! Error types for flipbadge-widgets.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading badge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest file could not be read.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML.
    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_io_mentions_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("badge.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("badge.yaml"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_config_error_io_source() {
        use std::error::Error as _;
        let err = ConfigError::Io {
            path: PathBuf::from("x.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_yaml_from() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[not, a, number]").unwrap_err();
        let err = ConfigError::from(yaml_err);
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_config_error_toml_from() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("TOML error"));
    }

    #[test]
    fn test_config_error_unsupported_format() {
        let err = ConfigError::UnsupportedFormat("json".to_string());
        assert_eq!(err.to_string(), "Unsupported manifest format: json");
    }
}
