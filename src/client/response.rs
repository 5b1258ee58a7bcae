//! Response envelope.
//!
//! [`ResponseMeta`] is a snapshot of the transport response that survives
//! after the body has been consumed: the status code plus a string copy of
//! the response headers. Rate-limit or pagination handling is deliberately
//! not built in; callers that need such signals read the raw headers here.

use std::collections::HashMap;

use reqwest::StatusCode;

/// Metadata for a completed API response.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status code of the response.
    pub status: StatusCode,

    /// Response headers as key-value pairs, names lowercased.
    ///
    /// Header values that are not valid UTF-8 are omitted.
    pub headers: HashMap<String, String>,
}

impl ResponseMeta {
    /// Captures status and headers from a transport response.
    pub(crate) fn from_response(response: &reqwest::Response) -> Self {
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        Self {
            status: response.status(),
            headers,
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Looks up a response header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_with(status: StatusCode, headers: &[(&str, &str)]) -> ResponseMeta {
        ResponseMeta {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_is_success() {
        assert!(meta_with(StatusCode::OK, &[]).is_success());
        assert!(meta_with(StatusCode::NO_CONTENT, &[]).is_success());
        assert!(!meta_with(StatusCode::NOT_FOUND, &[]).is_success());
        assert!(!meta_with(StatusCode::INTERNAL_SERVER_ERROR, &[]).is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let meta = meta_with(StatusCode::OK, &[("content-type", "application/json")]);
        assert_eq!(meta.header("Content-Type"), Some("application/json"));
        assert_eq!(meta.header("content-type"), Some("application/json"));
        assert_eq!(meta.header("x-missing"), None);
    }
}
