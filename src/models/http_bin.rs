//! Response models for the httpbin HTTP-methods endpoints.
//!
//! These structs mirror the JSON the remote service returns: a flat record of
//! the request headers it saw, plus the URL that was requested. httpbin
//! lowercases the header names it echoes, so the serde field names follow
//! suit.

use serde::{Deserialize, Serialize};

/// The echoed-request record returned by `GET /get`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBin {
    /// Request headers as observed by the server.
    #[serde(default)]
    pub headers: EchoedHeaders,

    /// The full URL the server saw for this request.
    #[serde(default)]
    pub url: String,
}

/// Request headers echoed back by the server.
///
/// Every field is optional; the server only includes headers that were
/// actually present on the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedHeaders {
    #[serde(
        rename = "x-api-version",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,

    #[serde(
        rename = "accept-encoding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_encoding: Option<String>,

    #[serde(
        rename = "accept-language",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,

    #[serde(
        rename = "user-agent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_agent: Option<String>,
}
