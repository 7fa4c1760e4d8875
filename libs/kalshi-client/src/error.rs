//! Client error taxonomy
//!
//! Every fallible operation in this crate funnels into [`ClientError`], so
//! callers branch on the error kind rather than on message text. The
//! retryable/permanent split is exposed through [`ClientError::is_retryable`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or unparseable API credentials. Fatal at construction.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// Connect, timeout, or body-read failure below the HTTP status line.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 429 from the exchange.
    #[error("rate limit exceeded")]
    RateLimited,

    /// Request signing failed, or the exchange rejected the signature (401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The exchange rejected a request parameter, e.g. a status value outside
    /// its accepted enum set. Distinguished so callers can skip instead of
    /// treating it as a failure.
    #[error("exchange rejected request parameters: {0}")]
    Validation(String),

    /// Any other non-success HTTP status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema.
    #[error("deserialization failed: {0}")]
    Deserialize(String),
}

impl ClientError {
    /// Whether the condition is expected to clear on its own (transient
    /// network trouble, rate limiting) as opposed to a permanent rejection.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::RateLimited)
    }

    /// Whether the exchange rejected a request parameter value.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<crate::auth::AuthError> for ClientError {
    fn from(e: crate::auth::AuthError) -> Self {
        ClientError::Auth(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(ClientError::RateLimited.is_retryable());
        assert!(!ClientError::Validation("status".to_string()).is_retryable());
        assert!(!ClientError::Auth("bad signature".to_string()).is_retryable());
        assert!(!ClientError::Api {
            status: 500,
            message: "internal".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_validation_classification() {
        assert!(ClientError::Validation("status".to_string()).is_validation());
        assert!(!ClientError::RateLimited.is_validation());
    }
}
