//! Client error types.
//!
//! This module defines the error type returned by every fallible operation in
//! the crate, covering transport failures, cancellation, and JSON
//! (de)serialization problems.

use std::fmt;

/// Errors that can occur while building or executing an API request.
///
/// Transport-level failures are passed through with enough classification to
/// diagnose the problem; no status-code level classification is performed.
#[derive(Debug)]
pub enum Error {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    Network(String),

    /// Request timed out before completion.
    Timeout,

    /// The request was cancelled through its [`CancelToken`].
    ///
    /// Surfaced in preference to the underlying transport error when the
    /// token was cancelled while the call was in flight.
    ///
    /// [`CancelToken`]: crate::client::CancelToken
    Cancelled,

    /// Invalid URL for the request.
    InvalidUrl(String),

    /// TLS error occurred during an HTTPS connection.
    Tls(String),

    /// The HTTP request could not be constructed.
    Build(String),

    /// The request body could not be serialized to JSON.
    Encode(String),

    /// The response body could not be decoded from JSON.
    Decode(String),

    /// Raw response bytes could not be copied to the caller's destination.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Timeout => write!(f, "Request timed out"),
            Error::Cancelled => write!(f, "Request cancelled"),
            Error::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            Error::Tls(msg) => write!(f, "TLS error: {}", msg),
            Error::Build(msg) => write!(f, "Request build error: {}", msg),
            Error::Encode(msg) => write!(f, "Request body encoding error: {}", msg),
            Error::Decode(msg) => write!(f, "Response body decoding error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Convert reqwest errors into [`Error`].
///
/// Maps reqwest's error states onto our variants so callers get consistent
/// classification regardless of where in the request cycle the failure hit.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_builder() {
            Error::Build(err.to_string())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else if err.to_string().contains("certificate")
            || err.to_string().contains("TLS")
            || err.to_string().contains("SSL")
        {
            Error::Tls(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

/// Convert URL parsing errors into [`Error`].
impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let network = Error::Network("Connection refused".to_string());
        assert_eq!(format!("{}", network), "Network error: Connection refused");

        assert_eq!(format!("{}", Error::Timeout), "Request timed out");
        assert_eq!(format!("{}", Error::Cancelled), "Request cancelled");

        let invalid = Error::InvalidUrl("not a url".to_string());
        assert_eq!(format!("{}", invalid), "Invalid URL: not a url");

        let decode = Error::Decode("expected value at line 1".to_string());
        assert_eq!(
            format!("{}", decode),
            "Response body decoding error: expected value at line 1"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: &dyn std::error::Error = &Error::Timeout;
        assert_eq!(format!("{}", err), "Request timed out");
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
