//! Portable pathname handling.
//!
//! This module turns arbitrary, possibly malformed pathname strings
//! into a canonical absolute form in three layers:
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize::normalize`] is a pure string transform: one separator
//! convention, no duplicate or redundant separators, `.` and `..`
//! segments resolved where something real precedes them, scheme and
//! drive prefixes preserved verbatim. It never consults the filesystem.
//!
//! ## Resolution
//!
//! [`PathResolver`] composes a parent and child pathname into a single
//! absolute canonical string. Whether the parent is an existing
//! directory (a join) or names a file (sibling resolution) is answered
//! by an injected [`FsProbe`](crate::fs::FsProbe) capability.
//!
//! ## The abstract pathname
//!
//! [`AbstractPath`] is the immutable value object pairing a raw
//! pathname spelling with its resolved absolute form; derived pathnames
//! are always new instances.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use pathio::fs::LocalFileSystem;
//! use pathio::path::{normalize::normalize, AbstractPath};
//!
//! assert_eq!(normalize("/a/b/../c"), "/a/c");
//!
//! let fs = Arc::new(LocalFileSystem::new());
//! let path = AbstractPath::with_base("z.txt", "/x/y.txt", fs).unwrap();
//! assert_eq!(path.absolute_path(), "/x/z.txt");
//! ```

pub mod file;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use file::AbstractPath;
pub use resolver::PathResolver;
