//! The local filesystem capability.
//!
//! [`LocalFileSystem`] implements [`FsProbe`](crate::fs::FsProbe) over
//! the host filesystem and carries the local-encoding hook: internally
//! the library holds every path as a UTF-8 string, and the hook converts
//! that string into whatever form a host primitive requires. The hook is
//! applied only at the point of handing a path to the host, never to
//! in-memory normalized or resolved strings.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;

use crate::error::{Error, Result};
use crate::fs::FsProbe;

/// Conversion from an internally-held path string to the host encoding.
type PathEncoder = Box<dyn Fn(&str) -> OsString + Send + Sync>;

/// The platform's local filesystem.
///
/// One instance is constructed at process start and shared by reference
/// with every resolver, path and stream backend that needs host access.
///
/// # Examples
///
/// ```
/// use pathio::fs::{FsProbe, LocalFileSystem};
///
/// let fs = LocalFileSystem::new();
/// assert!(!fs.exists("/definitely/not/a/real/path/xyz"));
/// ```
#[derive(Default)]
pub struct LocalFileSystem {
    encoder: Option<PathEncoder>,
}

impl LocalFileSystem {
    /// Creates a local filesystem with the default pass-through encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the local-encoding hook.
    ///
    /// The hook receives an internally-held UTF-8 path string and
    /// returns the form expected by the host. Hosts whose filesystem
    /// encoding is not UTF-8 set this once at process start; by default
    /// path strings pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsString;
    /// use pathio::fs::LocalFileSystem;
    ///
    /// let fs = LocalFileSystem::new()
    ///     .with_path_encoder(|path| OsString::from(path.to_string()));
    /// ```
    #[must_use]
    pub fn with_path_encoder(
        mut self,
        encoder: impl Fn(&str) -> OsString + Send + Sync + 'static,
    ) -> Self {
        self.encoder = Some(Box::new(encoder));
        self
    }

    /// Returns the pathname encoded for the host filesystem.
    ///
    /// This is the only place the encoding hook runs; callers hand the
    /// result straight to a host primitive.
    #[must_use]
    pub fn local_file_name(&self, path: &str) -> OsString {
        match &self.encoder {
            Some(encode) => encode(path),
            None => OsString::from(path),
        }
    }

    /// Returns the local filesystem's name-separator character.
    ///
    /// `\` on Windows and `/` elsewhere.
    #[must_use]
    pub fn separator() -> char {
        std::path::MAIN_SEPARATOR
    }

    /// Returns the local filesystem's path-list separator character.
    ///
    /// `;` on Windows and `:` elsewhere.
    #[must_use]
    pub fn path_separator() -> char {
        if cfg!(windows) {
            ';'
        } else {
            ':'
        }
    }
}

impl fmt::Debug for LocalFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalFileSystem")
            .field("encoder", &self.encoder.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl FsProbe for LocalFileSystem {
    fn exists(&self, path: &str) -> bool {
        fs::metadata(self.local_file_name(path)).is_ok()
    }

    fn is_file(&self, path: &str) -> bool {
        fs::metadata(self.local_file_name(path)).is_ok_and(|m| m.is_file())
    }

    fn is_directory(&self, path: &str) -> bool {
        fs::metadata(self.local_file_name(path)).is_ok_and(|m| m.is_dir())
    }

    fn byte_length(&self, path: &str) -> u64 {
        fs::metadata(self.local_file_name(path)).map_or(0, |m| m.len())
    }

    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir()?;
        cwd.to_str().map(ToString::to_string).ok_or_else(|| {
            Error::InvalidPath {
                path: cwd.to_string_lossy().into_owned(),
                reason: "working directory is not valid UTF-8".to_string(),
            }
        })
    }
}
