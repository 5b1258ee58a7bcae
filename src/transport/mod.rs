//! HTTP transport abstraction.
//!
//! The client talks to the wire through the [`Transport`] trait rather than a
//! concrete HTTP client, so callers can inject their own implementation (a
//! tuned `reqwest::Client`, a logging wrapper, or a test double). The default
//! transport is a `reqwest::Client` configured with conservative timeouts and
//! connection-pool limits.

pub mod logging;

use async_trait::async_trait;

use crate::error::Error;

pub use logging::LoggingTransport;

/// A component capable of performing an HTTP request and returning a
/// response.
///
/// This is the seam between the API client and the underlying HTTP stack.
/// Implementations must be safe to share across tasks; the client issues one
/// call per request with no internal coordination.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the response.
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, Error>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        self.execute(request).await.map_err(Error::from)
    }
}

/// Builds the default HTTP client used when none is injected.
///
/// Sensible defaults for an API client: a 10 second overall timeout, a 30
/// second connect timeout with TCP keepalive, up to 100 idle connections
/// kept per host, and TLS 1.2 as the minimum protocol version. The idle
/// limit is a per-host knob; the client only ever talks to its configured
/// base host, so it bounds the pool overall.
///
/// # Errors
///
/// Returns [`Error::Build`] if the underlying client cannot be constructed.
pub fn default_client() -> Result<reqwest::Client, Error> {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(30))
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(100)
        .pool_idle_timeout(Duration::from_secs(90))
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .build()
        .map_err(|e| Error::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_builds() {
        assert!(default_client().is_ok());
    }

    #[tokio::test]
    async fn test_reqwest_client_implements_transport() {
        // Compile-time check that reqwest::Client satisfies the trait object.
        let client = default_client().unwrap();
        let _transport: &dyn Transport = &client;
    }
}
