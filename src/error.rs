//! Error types for stream construction.
//!
//! The library is pure and deterministic: the only failure surfaced through
//! `Result` is a precondition violation at construction time. Divergence
//! under a never-satisfied filter is accepted caller behavior, not an error
//! the library detects.

use thiserror::Error;

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Cycling an empty sequence: the first element has no defined head.
    #[error("cannot cycle an empty sequence")]
    EmptyCycle,
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
