//! Error types for the FlyDeals SDK
//!
//! ## Table of Contents
//! - **ApiError**: Main error enum covering all failure modes
//! - **Result**: Type alias for `Result<T, ApiError>`

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Main error type for SDK operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx HTTP response from the API.
    ///
    /// `message` carries the server's `{"error": "..."}` field when the body
    /// parses, otherwise a generic `Request failed with status <code>` text.
    /// The status code is how callers tell an authentication failure (401)
    /// apart from other errors.
    #[error("{message}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Human-readable failure message
        message: String,
    },

    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Response body on the success path was not valid JSON
    #[error("decode error: {0}")]
    Decode(String),

    /// Local state store failure (token or preference persistence)
    #[error("storage error: {0}")]
    Storage(String),

    /// Client construction or configuration failure
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create an HTTP error with a status code and message
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code, when this error came from a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when this error is a 401 authentication failure
    pub fn is_auth_failure(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status() {
        let err = ApiError::http(404, "Deal not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Deal not found");
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn auth_failure_is_exactly_401() {
        assert!(ApiError::http(401, "unauthorized").is_auth_failure());
        assert!(!ApiError::http(403, "forbidden").is_auth_failure());
        assert!(!ApiError::Network("refused".to_string()).is_auth_failure());
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(ApiError::decode("bad json").status(), None);
        assert_eq!(ApiError::storage("io").status(), None);
    }
}
