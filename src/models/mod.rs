//! Data models for API responses.
//!
//! This module contains the typed structures the client decodes remote JSON
//! responses into.

pub mod http_bin;

pub use http_bin::{EchoedHeaders, HttpBin};
