//! Debug logging transport wrapper.
//!
//! Wraps another [`Transport`] and emits request/response traces through the
//! `log` facade. Each call is tagged with a generated request ID so the
//! request and response lines can be correlated when calls overlap.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::transport::Transport;

/// A transport that logs every request and response it carries.
///
/// Installed automatically when the client is constructed with the debug
/// option set. Traces go to `log::debug!` under the `httpbin_client` target,
/// so they are invisible unless a logger is installed and the level enabled.
#[derive(Debug, Clone)]
pub struct LoggingTransport<T> {
    inner: T,
}

impl<T> LoggingTransport<T> {
    /// Wraps the given transport with request/response logging.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consumes the wrapper, returning the inner transport.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for LoggingTransport<T> {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        let request_id = Uuid::new_v4();

        log::debug!("[{}] --> {} {}", request_id, request.method(), request.url());
        for (name, value) in request.headers() {
            log::debug!("[{}] --> {}: {}", request_id, name, value.to_str().unwrap_or("<binary>"));
        }
        if let Some(len) = request.body().and_then(|b| b.as_bytes()).map(|b| b.len()) {
            log::debug!("[{}] --> body: {} bytes", request_id, len);
        }

        let result = self.inner.send(request).await;

        match &result {
            Ok(response) => {
                log::debug!("[{}] <-- {}", request_id, response.status());
                for (name, value) in response.headers() {
                    log::debug!(
                        "[{}] <-- {}: {}",
                        request_id,
                        name,
                        value.to_str().unwrap_or("<binary>")
                    );
                }
            }
            Err(err) => {
                log::debug!("[{}] <-- error: {}", request_id, err);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inner_returns_wrapped_transport() {
        let client = reqwest::Client::new();
        let wrapped = LoggingTransport::new(client);
        let _inner: reqwest::Client = wrapped.into_inner();
    }
}
