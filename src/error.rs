//! Error types for zapi
//!
//! Defines the error enum covering all failure modes across the client.
//! Uses thiserror for ergonomic error handling.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for zapi operations
pub type Result<T> = std::result::Result<T, ZapiError>;

/// Error type for zapi operations
#[derive(Error, Debug)]
pub enum ZapiError {
    /// Credential/configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parsing errors (status codes, identifiers)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-2xx API response
    #[error("API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anyhow errors (for more context)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
