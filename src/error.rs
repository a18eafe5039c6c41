//! Error types for the ideosearch crate.
//!
//! All errors carry stable string messages suitable for display to users.
//! Query text never appears in error messages.

/// Errors that can occur while talking to the search service.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request failed: unreachable endpoint, transport error,
    /// or a non-success status from the service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be decoded as a result set.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for ideosearch results.
pub type Result<T> = std::result::Result<T, SearchError>;
