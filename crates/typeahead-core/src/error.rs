//! Error types for the typeahead controller.
//!
//! Every failure the controller can observe is funnelled through
//! [`TypeaheadError`]. Most of them never reach the user: the session logs
//! them and degrades the affected panel instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the typeahead library.
#[derive(Debug, Error)]
pub enum TypeaheadError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Persistence errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Result type alias for typeahead operations.
pub type Result<T> = std::result::Result<T, TypeaheadError>;

impl From<std::io::Error> for TypeaheadError {
    fn from(err: std::io::Error) -> Self {
        TypeaheadError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for TypeaheadError {
    fn from(err: serde_json::Error) -> Self {
        TypeaheadError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<url::ParseError> for TypeaheadError {
    fn from(err: url::ParseError) -> Self {
        TypeaheadError::InvalidUrl(err.to_string())
    }
}

impl TypeaheadError {
    /// Create a storage error from any displayable cause.
    pub fn storage(message: impl Into<String>) -> Self {
        TypeaheadError::Storage {
            message: message.into(),
        }
    }

    /// Whether this error came from talking to the remote service
    /// (as opposed to local persistence or configuration).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            TypeaheadError::Network { .. }
                | TypeaheadError::Timeout(_)
                | TypeaheadError::Http { .. }
                | TypeaheadError::Json { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypeaheadError::Http {
            status: 503,
            url: "http://localhost/api/search".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from http://localhost/api/search");

        let err = TypeaheadError::storage("quota exceeded");
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_is_remote() {
        assert!(TypeaheadError::Network {
            message: "refused".into(),
            cause: None
        }
        .is_remote());
        assert!(TypeaheadError::Timeout(std::time::Duration::from_secs(1)).is_remote());
        assert!(!TypeaheadError::storage("disabled").is_remote());
        let io: TypeaheadError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(!io.is_remote());
    }

    #[test]
    fn test_from_json_error() {
        let err: TypeaheadError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, TypeaheadError::Json { .. }));
    }

    #[test]
    fn test_from_url_error() {
        let err: TypeaheadError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, TypeaheadError::InvalidUrl(_)));
    }
}
