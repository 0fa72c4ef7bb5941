//! The sink side of the stream contract.
//!
//! A backend implements [`Sink::push`] plus optional flush/close hooks;
//! [`OutputStream`] owns the backend and performs the content coercion
//! ahead of every push. The coercion set is closed: anything without a
//! defined textual form fails with
//! [`Error::UnsupportedContent`](crate::Error::UnsupportedContent).

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::stream::StreamState;

/// A sink for output units.
///
/// Implementations supply the primitive push operation; all coercion
/// and lifecycle policy lives in [`OutputStream`].
pub trait Sink {
    /// Pushes the given text to the sink, blocking until it is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error, which is propagated verbatim.
    fn push(&mut self, content: &str) -> Result<()>;

    /// Forces buffered output to the underlying resource.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Releases any host resources held by the sink.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Content accepted by a write, covering the closed coercion set.
///
/// Most values convert implicitly through `From`; the write itself
/// turns the shape into text:
///
/// - text and numbers pass through verbatim
/// - booleans become the fixed literals `TRUE` / `FALSE`
/// - collections become the summary literal `Array(<count>)`,
///   intentionally lossy of their elements
/// - absent values become `NULL`
/// - host resource handles become `Resource###`
/// - an opaque value has no textual form and fails the write
///
/// # Examples
///
/// ```
/// use pathio::stream::Content;
///
/// let from_text: Content = "hello".into();
/// let from_number: Content = 42.into();
/// let from_list: Content = vec![1, 2, 3].into();
/// let absent: Content = Content::Null;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// An absent value, written as `NULL`.
    Null,
    /// Text, written verbatim.
    Text(String),
    /// An integer, written in decimal.
    Int(i64),
    /// A floating-point number, written in its shortest round-trip form.
    Float(f64),
    /// A boolean, written as `TRUE` or `FALSE`.
    Bool(bool),
    /// An ordered or keyed collection, reduced to its element count.
    Collection(usize),
    /// A low-level host resource handle, written as `Resource###`.
    Handle,
    /// A value with no textual form; writing it fails.
    Opaque(String),
}

impl Content {
    /// Builds content from any displayable value, using its string
    /// form.
    pub fn display<T: fmt::Display>(value: &T) -> Self {
        Self::Text(value.to_string())
    }

    /// Builds an opaque content marker describing the rejected shape.
    pub fn opaque(kind: impl Into<String>) -> Self {
        Self::Opaque(kind.into())
    }

    /// Coerces this content into its textual form.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedContent`] for opaque content.
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Null => Ok("NULL".to_string()),
            Self::Text(text) => Ok(text),
            Self::Int(n) => Ok(n.to_string()),
            Self::Float(x) => Ok(x.to_string()),
            Self::Bool(true) => Ok("TRUE".to_string()),
            Self::Bool(false) => Ok("FALSE".to_string()),
            Self::Collection(count) => Ok(format!("Array({count})")),
            Self::Handle => Ok("Resource###".to_string()),
            Self::Opaque(kind) => Err(Error::UnsupportedContent { kind }),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<char> for Content {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for Content {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Content {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Content {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T> From<Vec<T>> for Content {
    fn from(value: Vec<T>) -> Self {
        Self::Collection(value.len())
    }
}

impl<T> From<&[T]> for Content {
    fn from(value: &[T]) -> Self {
        Self::Collection(value.len())
    }
}

impl<K, V> From<&HashMap<K, V>> for Content {
    fn from(value: &HashMap<K, V>) -> Self {
        Self::Collection(value.len())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<&std::fs::File> for Content {
    fn from(_: &std::fs::File) -> Self {
        Self::Handle
    }
}

/// A writable stream over some [`Sink`].
///
/// The stream exclusively owns its backend and releases it exactly
/// once, either through [`close`](Self::close) or on drop. Once closed,
/// every write and flush fails with
/// [`Error::StreamClosed`](crate::Error::StreamClosed).
///
/// # Examples
///
/// ```
/// use pathio::stream::{OutputStream, StringSink};
///
/// let mut stream = OutputStream::new(StringSink::new());
/// stream.write("count: ").unwrap();
/// stream.writeln(3).unwrap();
/// stream.write(true).unwrap();
/// assert_eq!(stream.sink().as_str(), "count: 3\nTRUE");
/// ```
#[derive(Debug)]
pub struct OutputStream<K: Sink> {
    sink: K,
    state: StreamState,
    /// Back-reference to the pathname this stream was derived from,
    /// kept for diagnostics only.
    origin: Option<String>,
}

impl<K: Sink> OutputStream<K> {
    /// Wraps a sink in the shared write-policy layer.
    #[must_use]
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            state: StreamState::Open,
            origin: None,
        }
    }

    /// Wraps a sink, recording the pathname it was derived from.
    #[must_use]
    pub fn with_origin(sink: K, origin: impl Into<String>) -> Self {
        Self {
            sink,
            state: StreamState::Open,
            origin: Some(origin.into()),
        }
    }

    /// Returns the pathname this stream was derived from, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Returns the lifecycle state of this stream.
    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Returns a reference to the sink, for backends that expose their
    /// collected output.
    #[must_use]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Writes the provided content to this stream after coercing it to
    /// text.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedContent`](crate::Error::UnsupportedContent)
    /// for an uncoercible shape, with
    /// [`Error::StreamClosed`](crate::Error::StreamClosed) after close,
    /// and propagates host I/O errors verbatim.
    pub fn write(&mut self, content: impl Into<Content>) -> Result<()> {
        self.ensure_open("write")?;
        let text = content.into().into_text()?;
        self.sink.push(&text)
    }

    /// Writes the provided content and then terminates the line.
    ///
    /// This is two separate sink calls, not one atomic push: a partial
    /// failure can leave the content written without its terminator,
    /// and a line-buffered sink observes the two pushes separately.
    ///
    /// # Errors
    ///
    /// As for [`write`](Self::write).
    pub fn writeln(&mut self, content: impl Into<Content>) -> Result<()> {
        self.write(content)?;
        self.write("\n")
    }

    /// Forces buffered output to the underlying resource.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::StreamClosed`](crate::Error::StreamClosed)
    /// after close and propagates host I/O errors verbatim.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_open("flush")?;
        self.sink.flush()
    }

    /// Closes the stream and releases the backend.
    ///
    /// Closing an already-closed stream is a no-op.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error while releasing the handle; the
    /// stream is considered closed regardless.
    pub fn close(&mut self) -> Result<()> {
        if self.state == StreamState::Closed {
            return Ok(());
        }
        self.state = StreamState::Closed;
        self.sink.close()
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.state == StreamState::Closed {
            return Err(Error::StreamClosed {
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}

impl<K: Sink> Drop for OutputStream<K> {
    fn drop(&mut self) {
        // Deterministic release on every exit path.
        let _ = self.close();
    }
}
