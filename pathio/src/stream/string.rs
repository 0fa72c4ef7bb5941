//! In-memory stream backends.
//!
//! [`StringSource`] and [`StringSink`] carry no host resources, so
//! their close hooks are the trait defaults. They back the test suites
//! of the composition layer and any caller that wants stream semantics
//! over data already in memory.

use std::collections::VecDeque;

use crate::error::Result;
use crate::stream::{Sink, Source};

/// A source that yields the units of an in-memory string.
///
/// # Examples
///
/// ```
/// use pathio::stream::{InputStream, StringSource};
///
/// let mut stream = InputStream::new(StringSource::new("ab"));
/// assert_eq!(stream.read(2).unwrap(), "ab");
/// ```
#[derive(Debug, Clone)]
pub struct StringSource {
    units: VecDeque<char>,
}

impl StringSource {
    /// Builds a source over the given content.
    #[must_use]
    pub fn new(content: &str) -> Self {
        Self {
            units: content.chars().collect(),
        }
    }

    /// Returns the number of units not yet pulled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl Source for StringSource {
    fn pull(&mut self) -> Result<Option<char>> {
        Ok(self.units.pop_front())
    }

    fn ready(&self) -> bool {
        !self.units.is_empty()
    }
}

/// A sink that collects pushed text into an in-memory buffer.
///
/// # Examples
///
/// ```
/// use pathio::stream::{OutputStream, StringSink};
///
/// let mut stream = OutputStream::new(StringSink::new());
/// stream.write("hi").unwrap();
/// assert_eq!(stream.sink().as_str(), "hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    buffer: String,
    pushes: usize,
}

impl StringSink {
    /// Builds an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sink seeded with existing content; pushes append.
    #[must_use]
    pub fn with_content(content: &str) -> Self {
        Self {
            buffer: content.to_string(),
            pushes: 0,
        }
    }

    /// Returns everything collected so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the sink, yielding the collected buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Returns the number of individual pushes accepted.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.pushes
    }
}

impl Sink for StringSink {
    fn push(&mut self, content: &str) -> Result<()> {
        self.buffer.push_str(content);
        self.pushes += 1;
        Ok(())
    }
}
