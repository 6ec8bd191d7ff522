//! # Store Errors
//!
//! Every variant means the store could not serve the request. Details are
//! for logs only and never reach API callers.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Request never completed (connect, timeout, TLS)
    #[error("Store request failed: {0}")]
    Transport(String),

    /// Store answered with a non-success status
    #[error("Store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Access token could not be obtained
    #[error("Store authorization failed: {0}")]
    Auth(String),

    /// Service-account key missing or unusable
    #[error("Invalid store credentials: {0}")]
    Credentials(String),

    /// Response body was not the expected shape
    #[error("Malformed store response: {0}")]
    Decode(String),

    /// A verified append could not be read back
    #[error("Appended client {0} not visible after write")]
    AppendNotVisible(u64),

    /// In-process lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn transport(msg: impl Into<String>) -> Self {
        StoreError::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        StoreError::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = StoreError::Status {
            status: 403,
            body: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "Store returned status 403: denied");
    }

    #[test]
    fn test_append_not_visible_display() {
        assert_eq!(
            StoreError::AppendNotVisible(12).to_string(),
            "Appended client 12 not visible after write"
        );
    }
}
