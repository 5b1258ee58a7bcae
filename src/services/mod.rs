//! Typed service handles over the API surface.
//!
//! Each service groups the operations for one area of the remote API and
//! delegates the request/response cycle to the [`Client`](crate::Client).

pub mod http_methods;

pub use http_methods::HttpMethodsService;
