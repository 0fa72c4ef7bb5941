//! Standard-input backing.

use std::io;

use crate::error::Result;
use crate::stream::input::{InputStream, Source};

/// A source that pulls units from the process's standard input.
///
/// Closing the stream releases nothing on the host side: the process
/// does not own its standard input, so `close` only marks the wrapper.
/// Construct as many instances as needed; they all share the one host
/// handle.
#[derive(Debug, Default)]
pub struct StdinSource {
    _private: (),
}

impl StdinSource {
    /// Opens a readable stream over standard input.
    #[must_use]
    pub fn open() -> InputStream<Self> {
        InputStream::with_origin(Self::default(), "stdin")
    }
}

impl Source for StdinSource {
    fn pull(&mut self) -> Result<Option<char>> {
        let stdin = io::stdin();
        let mut lock = stdin.lock();
        crate::stream::read_unit(&mut lock)
    }

    fn ready(&self) -> bool {
        // No portable non-blocking poll on the host handle.
        true
    }
}
