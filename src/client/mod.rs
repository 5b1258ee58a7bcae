//! The API client.
//!
//! [`Client`] holds the transport configuration for talking to the remote
//! service and performs the request/response cycle: build an authenticated
//! request, send it through the configured [`Transport`], and decode the JSON
//! body into a caller-supplied type.
//!
//! Every call is a single synchronous round trip. The client itself is cheap
//! to clone and safe to share; concurrent calls are independent and share
//! only the transport's connection pool.

pub mod cancel;
pub mod response;

use std::io;
use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{Authorization, DEFAULT_TOKEN_PREFIX};
use crate::error::Error;
use crate::services::HttpMethodsService;
use crate::transport::{self, LoggingTransport, Transport};

pub use cancel::CancelToken;
pub use response::ResponseMeta;

/// API revision this client speaks, sent as the `X-Api-Version` header on
/// every request.
pub const API_VERSION: &str = "2.27";

/// Version of this client library, reported in the User-Agent string so the
/// remote service can track usage.
const UA_VERSION: &str = "1.0.0";

/// Header carrying the API revision.
const X_API_VERSION: HeaderName = HeaderName::from_static("x-api-version");

/// Convenience for building requests without a body.
pub const NO_BODY: Option<&'static ()> = None;

/// Client configuration options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Base URL for requests.
    pub host: Url,

    /// Optional path version segment, e.g. `v1` turns `/items` into
    /// `/v1/items`.
    pub version: Option<String>,

    /// Credentials for the `Authorization` header. Leave the token empty for
    /// anonymous access.
    pub authorization: Authorization,

    /// When set, requests and responses are traced through the `log` facade
    /// and response bodies are pretty-printed at debug level.
    pub debug: bool,
}

impl Opts {
    /// Creates options for the given host with no version segment, no
    /// authentication, and debug logging off.
    pub fn new(host: Url) -> Self {
        Self {
            host,
            version: None,
            authorization: Authorization::default(),
            debug: false,
        }
    }
}

/// Manages communication with the remote API.
///
/// Construct one with [`Client::new`] (default transport) or
/// [`Client::with_transport`] (injected transport). The configuration is
/// immutable after construction.
#[derive(Clone)]
pub struct Client {
    http: Arc<dyn Transport>,
    options: Opts,
    user_agent: String,
}

impl Client {
    /// Creates a client with the default HTTP transport.
    ///
    /// When `opts.debug` is set the transport is wrapped in a
    /// [`LoggingTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(opts: Opts) -> Result<Self, Error> {
        let http: Arc<dyn Transport> = if opts.debug {
            Arc::new(LoggingTransport::new(transport::default_client()?))
        } else {
            Arc::new(transport::default_client()?)
        };
        Ok(Self::with_transport(opts, http))
    }

    /// Creates a client that sends requests through the given transport.
    pub fn with_transport(mut opts: Opts, http: Arc<dyn Transport>) -> Self {
        if opts.authorization.prefix.is_empty() {
            opts.authorization.prefix = DEFAULT_TOKEN_PREFIX.to_string();
        }

        Self {
            http,
            options: opts,
            user_agent: format!(
                "sgen/HttpBin {}; Rust [{}-{}]",
                UA_VERSION,
                std::env::consts::ARCH,
                std::env::consts::OS
            ),
        }
    }

    /// Returns the configured options.
    pub fn options(&self) -> &Opts {
        &self.options
    }

    /// Returns the User-Agent string sent on every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the service handle for the HTTP-methods endpoints.
    pub fn http_methods(&self) -> HttpMethodsService {
        HttpMethodsService::new(self.clone())
    }

    /// Creates an authenticated API request that is ready to send.
    ///
    /// The path is joined onto the host, prefixed with the configured version
    /// segment when one is set. An optional body is serialized as JSON.
    ///
    /// Headers set on every request: `Accept`, `User-Agent`,
    /// `X-Api-Version`; `Authorization` only when a token is configured;
    /// `Content-Type` only when a body is present.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request, Error> {
        let trimmed = path.trim_start_matches('/');
        let path = match self.options.version.as_deref() {
            Some(version) if !version.is_empty() => {
                format!("{}/{}", version.trim_matches('/'), trimmed)
            }
            _ => trimmed.to_string(),
        };

        let mut url = self.options.host.clone();
        url.set_path(&path);

        let mut request = reqwest::Request::new(method, url);
        let headers = request.headers_mut();

        if let Some(value) = self.options.authorization.header_value() {
            let value =
                HeaderValue::from_str(&value).map_err(|e| Error::Build(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|e| Error::Build(e.to_string()))?,
        );
        headers.insert(X_API_VERSION, HeaderValue::from_static(API_VERSION));

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| Error::Encode(e.to_string()))?;
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            );
            *request.body_mut() = Some(reqwest::Body::from(bytes));
        }

        Ok(request)
    }

    /// Sends a prepared request and decodes the JSON response body into `T`.
    ///
    /// Returns the response envelope together with the decoded body, which is
    /// `None` when there was nothing to decode: a `204 No Content`, an empty
    /// body, or a non-2xx status (no status-code classification is performed;
    /// callers inspect the [`ResponseMeta`]).
    ///
    /// If a [`CancelToken`] is supplied and was cancelled while the transport
    /// call failed, [`Error::Cancelled`] is surfaced instead of the transport
    /// error.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
        cancel: Option<&CancelToken>,
    ) -> Result<(ResponseMeta, Option<T>), Error> {
        let (meta, bytes) = match self.perform(request, cancel).await? {
            (meta, Some(bytes)) => (meta, bytes),
            (meta, None) => return Ok((meta, None)),
        };

        if bytes.is_empty() {
            // An empty 2xx body is still a successful call.
            return Ok((meta, None));
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.to_string()))?;
        Ok((meta, Some(value)))
    }

    /// Sends a prepared request and copies the raw response bytes into the
    /// given writer, with no JSON decoding.
    ///
    /// Follows the same status handling as [`Client::execute`]: nothing is
    /// written for `204 No Content` or non-2xx responses.
    pub async fn execute_raw<W: io::Write>(
        &self,
        request: reqwest::Request,
        cancel: Option<&CancelToken>,
        writer: &mut W,
    ) -> Result<ResponseMeta, Error> {
        let (meta, bytes) = self.perform(request, cancel).await?;

        if let Some(bytes) = bytes {
            writer
                .write_all(&bytes)
                .map_err(|e| Error::Io(e.to_string()))?;
        }

        Ok(meta)
    }

    /// Shared send path: transport call, cancellation check, and body read.
    ///
    /// The body is `Some` only for 2xx responses that are not `204`.
    async fn perform(
        &self,
        request: reqwest::Request,
        cancel: Option<&CancelToken>,
    ) -> Result<(ResponseMeta, Option<Vec<u8>>), Error> {
        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                // A cancelled call usually surfaces as a transport failure;
                // the cancellation is the more useful signal to report.
                if cancel.is_some_and(CancelToken::is_cancelled) {
                    return Err(Error::Cancelled);
                }
                return Err(err);
            }
        };

        let meta = ResponseMeta::from_response(&response);

        if meta.status == StatusCode::NO_CONTENT || !meta.status.is_success() {
            return Ok((meta, None));
        }

        let bytes = response.bytes().await.map_err(Error::from)?.to_vec();

        if self.options.debug {
            log_response_body(&bytes);
        }

        Ok((meta, Some(bytes)))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.options)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Pretty-prints a JSON response body to the debug log.
///
/// Bodies that are not valid JSON are reported by size rather than aborting
/// the call.
fn log_response_body(bytes: &[u8]) {
    match serde_json::from_slice::<serde_json::Value>(bytes)
        .and_then(|value| serde_json::to_string_pretty(&value))
    {
        Ok(pretty) => log::debug!("response body:\n{}", pretty),
        Err(_) => log::debug!("response body: {} bytes (not JSON)", bytes.len()),
    }
}
