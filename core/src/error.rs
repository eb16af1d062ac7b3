//! Error types for the Emby API client.
//!
//! # Design
//! Authentication failures (401/403) get a dedicated variant because callers
//! usually react to a bad token differently from "the server said no". Every
//! other non-2xx status lands in `HttpStatus` with the raw status and body,
//! and transport failures keep the underlying error as their `source()`.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::http::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by [`EmbyClient`](crate::EmbyClient) and its endpoint modules.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 401 or 403.
    #[error("Authentication failed: {body}")]
    Authentication { status: u16, body: String },

    /// The server returned a non-2xx status other than 401/403.
    #[error("HTTP Status Error: {status}")]
    HttpStatus { status: u16, body: String },

    /// No status line was obtained (DNS, refused connection, timeout, ...).
    #[error("Network or routing error occurred: {0}")]
    Transport(#[source] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("Failed to parse response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A request could not be flattened into query parameters.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Api,
    Deserialization,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Authentication { .. } => ErrorKind::Authentication,
            ApiError::Deserialization(_) => ErrorKind::Deserialization,
            ApiError::HttpStatus { .. }
            | ApiError::Transport(_)
            | ApiError::Serialization(_)
            | ApiError::InvalidConfig(_) => ErrorKind::Api,
        }
    }

    /// HTTP status carried by the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } | ApiError::HttpStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn authentication_message_contains_body() {
        let err = ApiError::Authentication {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Authentication failed: Unauthorized");
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn status_message_contains_code() {
        let err = ApiError::HttpStatus {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn transport_error_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ApiError::Transport(Box::new(io));
        assert!(err.to_string().contains("connection refused"));
        assert!(err.source().is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn deserialization_kind() {
        let inner = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert_eq!(ApiError::from(inner).kind(), ErrorKind::Deserialization);
    }
}
