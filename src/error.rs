//! Error types for the dashcopy CLI

use thiserror::Error;

use crate::transfer::file::FileError;
use crate::transfer::validate::ValidationError;

/// Result type alias for dashcopy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid dashboard: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
///
/// Only `ServerError` and `Network` are ever retried by the transport.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied. Please check your grant key and try again.")]
    Unauthorized,

    #[error("API endpoint not found. Please check the API URL.")]
    NotFound,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {message}. {hint}")]
    Network { message: String, hint: String },

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("API returned errors: {0}")]
    Api(String),

    #[error("API response missing expected data structure: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Whether the transport may spend retry budget on this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::ServerError(_) | ApiError::Network { .. })
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `dashcopy connect` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Grant key not configured. Run `dashcopy connect` or pass --grant-key.")]
    MissingGrantKey,

    #[error(
        "Organization not configured. Run `dashcopy org set <ORG_ID>` or pass --org."
    )]
    MissingOrgId,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
