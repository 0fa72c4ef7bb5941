//! Error types for the pathio library.
//!
//! This module provides the error taxonomy for path construction and
//! stream operations, using `thiserror` for ergonomic error handling.
//! End-of-stream is part of this taxonomy but is an expected, recoverable
//! condition rather than a defect; callers are expected to branch on it
//! with [`Error::is_end_of_stream`].

use thiserror::Error;

/// Result type alias for operations that may fail with a pathio error.
///
/// # Examples
///
/// ```
/// use pathio::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/a/b"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathio library.
///
/// This enum encompasses all conditions that can occur during path
/// construction and stream I/O. Host I/O failures are wrapped verbatim
/// and never retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid pathname string was provided to a constructor.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The invalid raw pathname string.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A read source was exhausted.
    ///
    /// This is an expected control condition, not a defect: bounded
    /// reads surface it only when zero units could be obtained.
    #[error("end of stream reached")]
    EndOfStream,

    /// An operation was attempted on a closed stream.
    ///
    /// Use-after-close is a programmer defect and is always fatal to
    /// the call; the stream stays closed.
    #[error("stream closed: cannot {operation}")]
    StreamClosed {
        /// The operation that was attempted.
        operation: String,
    },

    /// A write was given content with no textual coercion.
    #[error("unsupported content for write: {kind}")]
    UnsupportedContent {
        /// A description of the rejected content shape.
        kind: String,
    },

    /// A stream was opened over a path that is not a regular file.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The absolute path that could not be opened.
        path: String,
    },

    /// A host I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is the expected end-of-stream condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathio::Error;
    ///
    /// assert!(Error::EndOfStream.is_end_of_stream());
    /// ```
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }

    /// Check if this error indicates use of a closed stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathio::Error;
    ///
    /// let err = Error::StreamClosed { operation: "read".to_string() };
    /// assert!(err.is_closed());
    /// ```
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::StreamClosed { .. })
    }

    /// Check if this error indicates a file that could not be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathio::Error;
    ///
    /// let err = Error::FileNotFound { path: "/missing".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
