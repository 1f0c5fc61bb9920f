//! CLI error types

use expsum_core::types::{CurveError, IsolationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `expsum` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to parse curve file {path}: {message}")]
    CurveFile { path: String, message: String },

    #[error("Invalid curve: {0}")]
    Curve(#[from] CurveError),

    #[error("Root isolation failed: {0}")]
    Isolation(#[from] IsolationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound("curve.toml".to_string());
        assert_eq!(err.to_string(), "File not found: curve.toml");

        let err = CliError::CurveFile {
            path: "c.json".to_string(),
            message: "expected a list".to_string(),
        };
        assert!(err.to_string().contains("c.json"));
    }

    #[test]
    fn test_from_core_errors() {
        let err: CliError = CurveError::DuplicateExponent { exponent: 0.5 }.into();
        assert!(matches!(err, CliError::Curve(_)));

        let err: CliError = IsolationError::NonFiniteRange {
            x_min: f64::NAN,
            x_max: 1.0,
        }
        .into();
        assert!(err.to_string().starts_with("Root isolation failed"));
    }
}
