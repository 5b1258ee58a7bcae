//! Typed client SDK for the httpbin HTTP testing service.
//!
//! This crate wraps standard HTTP request/response handling with
//! authentication header injection, API versioning, and JSON
//! (de)serialization, exposing the remote service through typed operations.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **client**: the [`Client`] that builds authenticated requests and
//!   performs the request/response cycle, plus cancellation and the response
//!   envelope
//! - **auth**: authorization credentials and token header formatting
//! - **transport**: the [`Transport`] seam over the HTTP stack, the default
//!   tuned `reqwest` client, and the debug logging wrapper
//! - **models**: serde structures for the remote JSON shapes
//! - **services**: typed operation groups, currently [`HttpMethodsService`]
//! - **error**: the crate-wide [`Error`] type
//!
//! # Usage
//!
//! ```no_run
//! use httpbin_client::{Authorization, Client, Opts};
//! use url::Url;
//!
//! # async fn run() -> Result<(), httpbin_client::Error> {
//! let mut opts = Opts::new(Url::parse("http://localhost:8085")?);
//! opts.authorization = Authorization::bearer("some-secure-token");
//! opts.debug = true;
//!
//! let client = Client::new(opts)?;
//! let echoed = client.http_methods().get().await?;
//! println!("server saw request for {}", echoed.url);
//! # Ok(())
//! # }
//! ```
//!
//! Every request carries `Accept: application/json`, a `User-Agent`
//! identifying this library, and an `X-Api-Version` header; the
//! `Authorization` header is added only when a token is configured.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

pub use auth::Authorization;
pub use client::{CancelToken, Client, Opts, ResponseMeta, API_VERSION, NO_BODY};
pub use error::Error;
pub use models::{EchoedHeaders, HttpBin};
pub use services::HttpMethodsService;
pub use transport::{LoggingTransport, Transport};
