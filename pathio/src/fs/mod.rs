//! Filesystem capabilities consumed by the path and stream layers.
//!
//! The core of this library never touches the host filesystem directly.
//! Everything it needs from the surrounding system is expressed as the
//! [`FsProbe`] capability trait, constructed once at process start and
//! passed by reference to every consumer. This keeps the resolver and
//! the `AbstractPath` value object testable against a fake filesystem.

pub mod local;

pub use local::LocalFileSystem;

use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// Filesystem probe and working-directory capability.
///
/// Given an absolute path string, a probe answers existence and kind
/// queries; it also supplies the process working directory used as the
/// default base for relative path construction.
///
/// Probe results are pure, unordered queries: an answer may be stale
/// immediately after it is returned. That is inherent to any such probe
/// and callers must not treat a positive answer as a lock.
///
/// # Examples
///
/// ```
/// use pathio::fs::{FsProbe, LocalFileSystem};
///
/// let fs = LocalFileSystem::new();
/// let cwd = fs.current_dir().unwrap();
/// assert!(fs.is_directory(&cwd));
/// ```
#[cfg_attr(test, automock)]
pub trait FsProbe: Send + Sync {
    /// Tests whether the file or directory named by `path` exists.
    fn exists(&self, path: &str) -> bool;

    /// Tests whether `path` names a regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Tests whether `path` names a directory.
    fn is_directory(&self, path: &str) -> bool;

    /// Returns the length in bytes of the file named by `path`, or 0 if
    /// the file does not exist.
    ///
    /// The value is unspecified when `path` names a directory. Some
    /// hosts report 0 for entities such as devices or pipes.
    fn byte_length(&self, path: &str) -> u64;

    /// Returns the process current working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined or is not
    /// representable as a pathname string.
    fn current_dir(&self) -> Result<String>;
}
