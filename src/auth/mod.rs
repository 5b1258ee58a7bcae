//! Authentication support for API requests.
//!
//! The client authenticates with a token sent in the `Authorization` header
//! behind a configurable scheme prefix. JWT-style `Bearer` tokens are the
//! default; the prefix can be overridden for services that use a custom
//! scheme.

pub mod bearer;

/// Default scheme prefix for JWT-style authentication tokens.
pub const DEFAULT_TOKEN_PREFIX: &str = "Bearer";

/// Authorization credentials for the client.
///
/// Holds the token and the scheme prefix used to build the `Authorization`
/// header. An empty token disables authentication entirely; an empty prefix
/// falls back to [`DEFAULT_TOKEN_PREFIX`] when the client is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorization {
    /// Scheme prefix placed before the token (optional; defaults to "Bearer").
    pub prefix: String,

    /// The authentication token, usually a JWT (required for authenticated
    /// requests; leave empty for anonymous access).
    pub token: String,
}

impl Authorization {
    /// Creates credentials with the default `Bearer` prefix.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            prefix: DEFAULT_TOKEN_PREFIX.to_string(),
            token: token.into(),
        }
    }

    /// Reconstructs credentials from an `Authorization` header value.
    ///
    /// Returns `None` when the header does not carry a token behind the
    /// given scheme prefix.
    pub fn from_header_value(prefix: &str, header: &str) -> Option<Self> {
        let token = bearer::parse_token_header(prefix, header)?;
        Some(Self {
            prefix: prefix.to_string(),
            token,
        })
    }

    /// Returns `true` if a token has been configured.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Builds the `Authorization` header value, or `None` when no token is
    /// configured.
    pub fn header_value(&self) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        Some(bearer::format_token_header(&self.prefix, &self.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_constructor() {
        let auth = Authorization::bearer("abc123");
        assert_eq!(auth.prefix, "Bearer");
        assert_eq!(auth.token, "abc123");
        assert!(auth.is_configured());
    }

    #[test]
    fn test_header_value_with_token() {
        let auth = Authorization::bearer("some-secure-token");
        assert_eq!(
            auth.header_value(),
            Some("Bearer some-secure-token".to_string())
        );
    }

    #[test]
    fn test_header_value_custom_prefix() {
        let auth = Authorization {
            prefix: "okta".to_string(),
            token: "tok".to_string(),
        };
        assert_eq!(auth.header_value(), Some("okta tok".to_string()));
    }

    #[test]
    fn test_from_header_value_roundtrip() {
        let auth = Authorization::bearer("some-secure-token");
        let header = auth.header_value().unwrap();

        let parsed = Authorization::from_header_value("Bearer", &header).unwrap();
        assert_eq!(parsed, auth);
    }

    #[test]
    fn test_from_header_value_wrong_scheme() {
        assert_eq!(
            Authorization::from_header_value("Bearer", "Basic dXNlcjpwYXNz"),
            None
        );
        assert_eq!(Authorization::from_header_value("Bearer", "Bearer "), None);
    }

    #[test]
    fn test_header_value_without_token() {
        let auth = Authorization::default();
        assert!(!auth.is_configured());
        assert_eq!(auth.header_value(), None);
    }
}
