//! Feed Errors
//!
//! Every failure the loader can report. None of them is fatal: the
//! scroll-triggered path logs them and waits for the next scroll.

use thiserror::Error;

/// Common result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// The cursor read from the last card cannot be used by the cursor policy
    #[error("Invalid cursor {cursor:?}: {reason}")]
    InvalidCursor { cursor: String, reason: String },

    /// A template or the cursor stamp needed a field the item does not carry
    #[error("Feed item has no `{0}` field")]
    MissingField(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// The response body is not a feed page
    #[error("Decode error: {0}")]
    Decode(String),

    /// The container could not be read or mutated
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid feed config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}
