//! Error types for music-cli.

use thiserror::Error;

/// Errors raised while building or exposing listening context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Unknown mood: '{input}' (expected one of: {expected})")]
    UnknownMood { input: String, expected: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid day periods: {0}")]
    InvalidPeriods(String),

    #[error(
        "Context export surface drifted: missing [{}], unexpected [{}]",
        .missing.join(", "),
        .extra.join(", ")
    )]
    ExportDrift {
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Context(#[from] ContextError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
