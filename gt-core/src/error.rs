//! Error types for the Grafana admin workspace.
//!
//! Every failure an API call can produce is one `GtError` variant. The four
//! request-level kinds (encoding, transport, HTTP status, decoding) are kept
//! flat so callers can branch on them directly; a non-200 reply is always
//! `HttpStatus` and callers inspect the embedded code.

use thiserror::Error;

/// Convenience type alias for Results using GtError.
pub type GtResult<T> = Result<T, GtError>;

/// Unified error type for configuration, transport and API failures.
#[derive(Error, Debug)]
pub enum GtError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Request errors --
    /// The request body could not be serialized. No request was sent.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status other than 200.
    #[error("HTTP error {status}: returns {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// The server answered 200 but the body did not match the expected shape.
    #[error("decoding error: {message}\n{body}")]
    Decoding {
        /// Parser diagnostic.
        message: String,
        /// Raw response body, verbatim.
        body: String,
    },

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised by the HTTP transport before a status code is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The connection to the server could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The call was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// Any other transport-level failure (TLS, protocol, body read).
    #[error("http error: {0}")]
    Request(String),
}

impl GtError {
    /// Build a `HttpStatus` error from a status code and raw body bytes.
    pub fn http_status(status: u16, body: &[u8]) -> Self {
        GtError::HttpStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Build a `Decoding` error from a parser diagnostic and raw body bytes.
    pub fn decoding(message: impl ToString, body: &[u8]) -> Self {
        GtError::Decoding {
            message: message.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// The HTTP status code carried by an `HttpStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            GtError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the call was aborted through cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GtError::Transport(TransportError::Cancelled))
    }
}

impl From<toml::de::Error> for GtError {
    fn from(e: toml::de::Error) -> Self {
        GtError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display_keeps_body() {
        let err = GtError::http_status(404, br#"{"message":"user not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"HTTP error 404: returns {"message":"user not found"}"#
        );
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decoding_carries_raw_body() {
        let err = GtError::decoding("expected value at line 1 column 1", b"<html>");
        match err {
            GtError::Decoding { message, body } => {
                assert!(message.contains("expected value"));
                assert_eq!(body, "<html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: GtError = TransportError::Cancelled.into();
        assert_eq!(err.to_string(), "request cancelled");
        assert!(err.is_cancelled());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_display() {
        let err = GtError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }
}
