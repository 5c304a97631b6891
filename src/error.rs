//! Error types for docsift.
//!
//! The extraction engine itself has no failure modes: region selection always
//! terminates with a fallback, URL handling is best-effort, and unknown tags
//! pass through. The only fallible surface is serializing results.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serializing an extraction result to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
