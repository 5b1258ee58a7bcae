//! Cooperative request cancellation.
//!
//! A [`CancelToken`] is a shared flag a caller can trip while a request is in
//! flight. The client checks it when a transport call fails, so a request
//! torn down by cancellation reports [`Error::Cancelled`](crate::Error)
//! instead of the underlying transport error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

/// A handle for cancelling an in-flight request.
///
/// Tokens are cheap to clone; all clones share the same flag. Cancellation is
/// cooperative: tripping the flag does not abort the transport call itself,
/// it only changes how a failure of that call is reported.
#[derive(Debug, Clone)]
pub struct CancelToken {
    /// Unique identifier for the request this token belongs to.
    request_id: String,

    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new token with a generated UUID.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Creates a new token with a specific request ID.
    pub fn with_id(request_id: String) -> Self {
        Self {
            request_id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the request ID this token was created with.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Marks the request as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Checks whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.request_id().is_empty());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_with_id() {
        let token = CancelToken::with_id("req-1".to_string());
        assert_eq!(token.request_id(), "req-1");
    }

    #[test]
    fn test_cancel_trips_flag() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());

        // The flag persists across repeated checks.
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token.request_id(), clone.request_id());
    }
}
