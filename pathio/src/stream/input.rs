//! The source side of the stream contract.
//!
//! A backend implements [`Source::pull`], nothing more; [`InputStream`]
//! owns the backend and composes the bounded-read and line-read
//! policies over that primitive. End-of-stream is a tagged outcome at
//! the primitive level (`Ok(None)`) so the expected condition needs no
//! error-based control flow; the composed operations convert it to
//! [`Error::EndOfStream`] only where the contract requires a failure.

use crate::error::{Error, Result};
use crate::stream::StreamState;

/// A source of input units.
///
/// Implementations supply the single primitive operation and,
/// optionally, a readiness hint and a hook to release the underlying
/// host handle. All read policy lives in [`InputStream`].
pub trait Source {
    /// Pulls the next unit, blocking until one is available.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error, which is propagated verbatim.
    fn pull(&mut self) -> Result<Option<char>>;

    /// Best-effort hint that a pull would not block. Not a reliable
    /// poll; the default is always true.
    fn ready(&self) -> bool {
        true
    }

    /// Releases any host resources held by the source.
    ///
    /// # Errors
    ///
    /// Fails only on a host I/O error.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A readable stream over some [`Source`].
///
/// The stream exclusively owns its backend and releases it exactly once,
/// either through [`close`](Self::close) or on drop. Once closed, every
/// read fails with [`Error::StreamClosed`].
///
/// # Examples
///
/// ```
/// use pathio::stream::{InputStream, StringSource};
///
/// let mut stream = InputStream::new(StringSource::new("one\ntwo"));
/// assert_eq!(stream.read_line(None).unwrap(), "one");
/// assert_eq!(stream.read(3).unwrap(), "two");
/// assert!(stream.read(1).unwrap_err().is_end_of_stream());
/// ```
#[derive(Debug)]
pub struct InputStream<S: Source> {
    source: S,
    state: StreamState,
    /// Back-reference to the pathname this stream was derived from,
    /// kept for diagnostics only.
    origin: Option<String>,
}

impl<S: Source> InputStream<S> {
    /// Wraps a source in the shared read-policy layer.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: StreamState::Open,
            origin: None,
        }
    }

    /// Wraps a source, recording the pathname it was derived from.
    #[must_use]
    pub fn with_origin(source: S, origin: impl Into<String>) -> Self {
        Self {
            source,
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

    /// Reads up to `len` units.
    ///
    /// - `len < 0` is treated as 1.
    /// - `len == 0` returns an empty result without touching the source.
    /// - `len == 1` reads exactly one unit.
    /// - `len > 1` reads up to `len` units, stopping early when the
    ///   source is exhausted: a partial result of at least one unit is
    ///   returned successfully.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EndOfStream`] if zero units could be
    /// obtained, with [`Error::StreamClosed`] after close, and
    /// propagates host I/O errors verbatim.
    pub fn read(&mut self, len: isize) -> Result<String> {
        self.ensure_open("read")?;
        let len = if len < 0 { 1 } else { len };
        if len == 0 {
            return Ok(String::new());
        }

        let mut out = String::new();
        for obtained in 0..len {
            match self.source.pull()? {
                Some(unit) => out.push(unit),
                None if obtained == 0 => return Err(Error::EndOfStream),
                None => break,
            }
        }
        Ok(out)
    }

    /// Reads one line, accumulating units one at a time.
    ///
    /// Reading stops at the first carriage return or line feed (which
    /// is discarded), or after `max_len - 1` accumulated units. With
    /// `Some(0)` or `Some(1)` the result is empty and the source is
    /// never touched.
    ///
    /// # Errors
    ///
    /// End-of-stream from the primitive always propagates to the
    /// caller, even mid-line; units accumulated before exhaustion are
    /// discarded. This is deliberately asymmetric with [`read`], whose
    /// bounded form keeps partial results. Also fails with
    /// [`Error::StreamClosed`] after close and propagates host I/O
    /// errors verbatim.
    ///
    /// [`read`]: Self::read
    pub fn read_line(&mut self, max_len: Option<usize>) -> Result<String> {
        self.ensure_open("read_line")?;

        let mut line = String::new();
        let mut accumulated = 0;
        loop {
            if let Some(max) = max_len {
                if accumulated >= max.saturating_sub(1) {
                    break;
                }
            }
            let unit = self.source.pull()?.ok_or(Error::EndOfStream)?;
            if unit == '\n' || unit == '\r' {
                break;
            }
            line.push(unit);
            accumulated += 1;
        }
        Ok(line)
    }

    /// Reads every remaining unit until the source is exhausted.
    ///
    /// Exhaustion is the expected terminator here, so an already-empty
    /// source yields an empty result rather than end-of-stream.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::StreamClosed`] after close and propagates
    /// host I/O errors verbatim.
    pub fn read_all(&mut self) -> Result<String> {
        self.ensure_open("read_all")?;
        let mut out = String::new();
        while let Some(unit) = self.source.pull()? {
            out.push(unit);
        }
        Ok(out)
    }

    /// Best-effort hint that this stream is ready to be read.
    ///
    /// Always false once closed; otherwise delegates to the source.
    /// Not a reliable poll.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.state == StreamState::Open && self.source.ready()
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
        self.source.close()
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

impl<S: Source> Drop for InputStream<S> {
    fn drop(&mut self) {
        // Deterministic release on every exit path.
        let _ = self.close();
    }
}
