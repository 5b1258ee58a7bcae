//! Service for the httpbin HTTP-methods endpoints.

use reqwest::Method;

use crate::client::{CancelToken, Client, NO_BODY};
use crate::error::Error;
use crate::models::HttpBin;

/// Manages the interactions for the httpbin HTTP-methods endpoints.
///
/// Obtained from [`Client::http_methods`].
#[derive(Debug, Clone)]
pub struct HttpMethodsService {
    client: Client,
}

impl HttpMethodsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves the echoed-request record from `GET /get`.
    ///
    /// A successful response with nothing to decode (a `204` or an empty
    /// body) yields a default-valued record.
    pub async fn get(&self) -> Result<HttpBin, Error> {
        self.get_inner(None).await
    }

    /// Same as [`get`](Self::get), with cooperative cancellation.
    ///
    /// If the token is cancelled while the transport call fails, the error is
    /// reported as [`Error::Cancelled`].
    pub async fn get_with_cancel(&self, cancel: &CancelToken) -> Result<HttpBin, Error> {
        self.get_inner(Some(cancel)).await
    }

    async fn get_inner(&self, cancel: Option<&CancelToken>) -> Result<HttpBin, Error> {
        // httpbin has a very simple get path
        let request = self.client.build_request(Method::GET, "/get", NO_BODY)?;

        let (_meta, body) = self.client.execute::<HttpBin>(request, cancel).await?;
        Ok(body.unwrap_or_default())
    }
}
