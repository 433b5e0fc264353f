//! Error types for vtl-validator.
//!
//! Uses thiserror for structured errors. The three-stage core only ever
//! produces [`TransformError::InvalidDirective`]; the remaining variants come
//! from the ambient layers (configuration and resolver store loading).

use thiserror::Error;

/// Top-level error type for vtl-validator.
#[derive(Error, Debug)]
pub enum TransformError {
    /// A `@validator` directive occurrence cannot be compiled.
    ///
    /// Raised synchronously and never caught internally: the host is expected
    /// to abort compilation of the whole schema.
    #[error("InvalidDirectiveError: {0}")]
    InvalidDirective(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed or produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors while loading a [`TransformerConfig`](crate::core::config::TransformerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {error}")]
    Read {
        /// Path of the config file
        path: String,
        /// Underlying I/O error text
        error: String,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting parsed but cannot be used.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Offending setting
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl TransformError {
    /// Shorthand for building an [`TransformError::InvalidDirective`].
    pub fn invalid_directive(message: impl Into<String>) -> Self {
        TransformError::InvalidDirective(message.into())
    }

    /// Check whether this error rejects the directive itself (as opposed to an
    /// environment failure such as a missing file).
    pub fn is_invalid_directive(&self) -> bool {
        matches!(self, TransformError::InvalidDirective(_))
    }

    /// Get the bare directive message, if this is a directive error.
    pub fn directive_message(&self) -> Option<&str> {
        match self {
            TransformError::InvalidDirective(message) => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for transformer operations.
pub type TransformResult<T> = Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_display() {
        let error = TransformError::invalid_directive("regex requires an expression");
        assert!(error.is_invalid_directive());
        assert_eq!(error.directive_message(), Some("regex requires an expression"));
        assert_eq!(
            error.to_string(),
            "InvalidDirectiveError: regex requires an expression"
        );
    }

    #[test]
    fn test_config_error_is_not_directive_error() {
        let error: TransformError = ConfigError::InvalidValue {
            key: "input_path".to_string(),
            reason: "must start with '$'".to_string(),
        }
        .into();
        assert!(!error.is_invalid_directive());
        assert!(error.directive_message().is_none());
        assert!(error.to_string().contains("input_path"));
    }
}
