//! Error types for themecfg.
//!
//! Every error carries the path that caused it: the source file for schema
//! and I/O failures, the dotted field path for value failures.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for themecfg operations.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The document is not shaped like a theme config: unknown or missing
    /// field, wrong value type, or an unrecognized `mode`/`darkMode`.
    #[error("schema error in {path}: {message}")]
    Schema { path: String, message: String },

    /// A field is present but its value fails domain validation.
    #[error("invalid value at {path}: {message}")]
    Value { path: String, message: String },

    /// The config file could not be read or written.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A loaded config could not be written back out as YAML or JSON.
    #[error("{0}")]
    Serialize(String),

    /// The user asked for something the CLI refuses to do.
    #[error("{0}")]
    Usage(String),
}

impl ThemeError {
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        ThemeError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn value(path: impl Into<String>, message: impl Into<String>) -> Self {
        ThemeError::Value {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ThemeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ThemeError::Usage(_) => exit_codes::USAGE_ERROR,
            ThemeError::Schema { .. } => exit_codes::SCHEMA_FAILURE,
            ThemeError::Value { .. } => exit_codes::VALUE_FAILURE,
            ThemeError::Io { .. } => exit_codes::IO_FAILURE,
            ThemeError::Serialize(_) => exit_codes::SERIALIZE_FAILURE,
        }
    }

    /// The file or field path this error points at, if any.
    pub fn path(&self) -> Option<String> {
        match self {
            ThemeError::Schema { path, .. } | ThemeError::Value { path, .. } => Some(path.clone()),
            ThemeError::Io { path, .. } => Some(path.display().to_string()),
            ThemeError::Serialize(_) | ThemeError::Usage(_) => None,
        }
    }
}

/// Result type alias for themecfg operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_has_correct_exit_code() {
        let err = ThemeError::schema("theme.yaml", "unknown field `foo`");
        assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
    }

    #[test]
    fn value_error_has_correct_exit_code() {
        let err = ThemeError::value("colors.pri.500", "not a color");
        assert_eq!(err.exit_code(), exit_codes::VALUE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = ThemeError::io(
            "missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn usage_error_has_correct_exit_code() {
        let err = ThemeError::Usage("file exists".to_string());
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
        assert_eq!(err.path(), None);
    }

    #[test]
    fn serialize_error_is_not_a_schema_error() {
        let err = ThemeError::Serialize("failed to serialize config to YAML: boom".to_string());
        assert_eq!(err.exit_code(), exit_codes::SERIALIZE_FAILURE);
        assert_ne!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
        assert_eq!(err.path(), None);
        assert_eq!(err.to_string(), "failed to serialize config to YAML: boom");
    }

    #[test]
    fn error_messages_name_the_path() {
        let err = ThemeError::value("theme.screens.md", "expected a length");
        assert_eq!(
            err.to_string(),
            "invalid value at theme.screens.md: expected a length"
        );
        assert_eq!(err.path().as_deref(), Some("theme.screens.md"));

        let err = ThemeError::io(
            "/tmp/nope.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("failed to access '/tmp/nope.yaml'"));
    }
}
