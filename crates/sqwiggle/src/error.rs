//! Client error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server rejected the request.
    #[error("API error ({status}): {error}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error body returned by the server.
        error: ApiError,
    },

    /// Server answered but the body could not be decoded.
    #[error("Failed to decode response ({status}): {source}")]
    Decode {
        /// HTTP status code.
        status: u16,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The server-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Api { status, error } => {
                *status == 401 || error.kind == ErrorType::Authentication
            }
            _ => false,
        }
    }

    /// Check if a plan or rate limit was hit.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Error::Api { status, error } => *status == 429 || error.kind == ErrorType::LimitReached,
            _ => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the Sqwiggle API.
///
/// ```json
/// { "type": "invalid_param", "message": "...", "details": "...", "param": "stream_id" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category.
    #[serde(rename = "type", default, deserialize_with = "crate::lenient::or_default")]
    pub kind: ErrorType,
    /// Human readable message.
    #[serde(default, deserialize_with = "crate::lenient::or_default")]
    pub message: String,
    /// Further explanation, often a link to the docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Offending parameter for parameter errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(param) = &self.param {
            write!(f, " (param: {})", param)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Category of an [`ApiError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Missing or invalid credentials.
    Authentication,
    /// Valid credentials without permission for the resource.
    Authorization,
    /// A supplied parameter failed validation.
    InvalidParam,
    /// An unrecognized parameter was supplied.
    UnknownParam,
    /// A plan or quota limit was reached.
    LimitReached,
    /// Generic validation failure.
    Validation,
    /// Anything else, including categories added after this client.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ErrorType {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Authentication => "authentication",
            ErrorType::Authorization => "authorization",
            ErrorType::InvalidParam => "invalid_param",
            ErrorType::UnknownParam => "unknown_param",
            ErrorType::LimitReached => "limit_reached",
            ErrorType::Validation => "validation",
            ErrorType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
