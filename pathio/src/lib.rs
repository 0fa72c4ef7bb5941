#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(missing_docs))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathio
//!
//! A library for portable pathname manipulation and character-stream
//! I/O.
//!
//! Pathnames are handled as strings, independent of the host: a pure
//! normalization pass canonicalizes separators, redundant segments and
//! scheme or drive prefixes, and a resolution pass composes parent and
//! child pathnames into absolute canonical form. Every filesystem
//! question goes through an injected [`FsProbe`] capability, so path
//! logic stays testable without touching a disk.
//!
//! ## Core Types
//!
//! - [`AbstractPath`] and [`PathResolver`]: pathname values and resolution
//! - [`FsProbe`] and [`LocalFileSystem`]: the filesystem capability seam
//! - [`InputStream`] and [`OutputStream`]: stream compositions over
//!   minimal [`Source`] / [`Sink`] backends
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathio::path::normalize::normalize;
//! use pathio::{InputStream, StringSource};
//!
//! // Canonicalize a messy relative pathname
//! assert_eq!(normalize("a\\b//../c"), "./a/c");
//!
//! // Read lines from an in-memory stream
//! let mut stream = InputStream::new(StringSource::new("one\ntwo\n"));
//! assert_eq!(stream.read_line(None).unwrap(), "one");
//! ```

pub mod error;
pub mod fs;
pub mod path;
pub mod stream;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fs::{FsProbe, LocalFileSystem};
pub use path::{AbstractPath, PathResolver};
pub use stream::{
    Content, FileSource, InputStream, OutputStream, Sink, Source, StdinSource, StreamState,
    StringSink, StringSource,
};
