//! Sequential, blocking stream primitives.
//!
//! A stream is an exclusively-owned channel for reading units of data
//! from a source or pushing them to a sink. Backends implement nothing
//! but a single primitive operation ([`Source::pull`] or
//! [`Sink::push`]); the bounded-read, line-read and write-coercion
//! policies live in one shared composition layer ([`InputStream`] and
//! [`OutputStream`]) so no backend can re-derive the edge cases.
//!
//! Every operation blocks the caller until data is available, the sink
//! accepts, or failure occurs. Two streams opened over the same
//! physical resource are not coordinated by this design.

pub mod file;
pub mod input;
pub mod output;
pub mod stdin;
pub mod string;

pub use file::FileSource;
pub use input::{InputStream, Source};
pub use output::{Content, OutputStream, Sink};
pub use stdin::StdinSource;
pub use string::{StringSink, StringSource};

use std::io::{self, Read};

use crate::error::Result;

/// Lifecycle state of a stream.
///
/// Closed is terminal: a closed stream never reopens, and re-closing it
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// The stream owns a live backend and accepts operations.
    Open,
    /// The backend has been released; all reads and writes fail.
    Closed,
}

/// Reads one UTF-8 encoded character from a byte reader.
///
/// Returns `Ok(None)` at end of input. A byte sequence that is not
/// valid UTF-8, or that ends mid-character, surfaces as an
/// `InvalidData` host I/O error.
pub(crate) fn read_unit<R: Read + ?Sized>(reader: &mut R) -> Result<Option<char>> {
    let mut first = [0u8; 1];
    if reader.read(&mut first)? == 0 {
        return Ok(None);
    }

    let width = utf8_width(first[0]).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8 leading byte")
    })?;

    let mut buf = [0u8; 4];
    buf[0] = first[0];
    let mut filled = 1;
    while filled < width {
        let n = reader.read(&mut buf[filled..width])?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "input ended in the middle of a UTF-8 character",
            )
            .into());
        }
        filled += n;
    }

    let decoded = std::str::from_utf8(&buf[..width]).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8 sequence")
    })?;
    Ok(decoded.chars().next())
}

/// UTF-8 sequence width from the leading byte.
fn utf8_width(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}
