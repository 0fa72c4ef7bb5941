//! The abstract pathname value object.
//!
//! User interfaces and operating systems use system-dependent pathname
//! strings to name files and directories. [`AbstractPath`] presents a
//! system-independent view of a hierarchical pathname: an immutable
//! pair of the raw spelling the caller supplied and its resolved
//! absolute canonical form. Derived pathnames (parent, absolute form)
//! are new instances, never mutations.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::FsProbe;
use crate::path::normalize::normalize;
use crate::path::resolver::PathResolver;

/// An abstract representation of a file or directory pathname.
///
/// Construction resolves the raw pathname against a base directory
/// (the process working directory by default) through the injected
/// filesystem probe, and the resulting absolute path stays fixed for
/// the lifetime of the instance. Existence and kind queries delegate to
/// the probe on the absolute path.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathio::fs::LocalFileSystem;
/// use pathio::path::AbstractPath;
///
/// let fs = Arc::new(LocalFileSystem::new());
/// let path = AbstractPath::with_base("notes/todo.txt", "/home/user", fs).unwrap();
/// assert_eq!(path.name(), "todo.txt");
/// assert!(path.absolute_path().starts_with('/'));
/// ```
#[derive(Clone)]
pub struct AbstractPath {
    /// The raw pathname string exactly as supplied.
    raw: String,
    /// The resolved absolute canonical pathname.
    absolute: String,
    probe: Arc<dyn FsProbe>,
}

impl AbstractPath {
    /// Creates an abstract pathname resolved against the process
    /// working directory.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPath`] if `path` is not a valid
    /// path-typed string, or if the working directory cannot be
    /// determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pathio::fs::LocalFileSystem;
    /// use pathio::path::AbstractPath;
    ///
    /// let fs = Arc::new(LocalFileSystem::new());
    /// let path = AbstractPath::new("src/lib.rs", fs).unwrap();
    /// assert_eq!(path.path(), "src/lib.rs");
    /// ```
    pub fn new(path: &str, probe: Arc<dyn FsProbe>) -> Result<Self> {
        Self::with_base(path, "", probe)
    }

    /// Creates an abstract pathname resolved against an explicit base.
    ///
    /// An empty `base` defaults to the process working directory. The
    /// invariant `absolute == resolve(base, normalize(path))` holds for
    /// every constructed instance.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPath`] if either string is not a
    /// valid path-typed string.
    pub fn with_base(path: &str, base: &str, probe: Arc<dyn FsProbe>) -> Result<Self> {
        validate_path_string(path)?;
        validate_path_string(base)?;

        let base = if base.is_empty() {
            probe.current_dir()?
        } else {
            base.to_string()
        };

        let normalized = normalize(path);
        let resolver = PathResolver::new(Arc::clone(&probe));
        let absolute = resolver.resolve(&base, &normalized);

        Ok(Self {
            raw: path.to_string(),
            absolute,
            probe,
        })
    }

    /// Returns the raw pathname string this instance was built from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.raw
    }

    /// Returns the absolute canonical pathname string.
    #[must_use]
    pub fn absolute_path(&self) -> &str {
        &self.absolute
    }

    /// Returns the absolute form of this abstract pathname as a new
    /// instance denoting the same file or directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined.
    pub fn absolute_file(&self) -> Result<Self> {
        Self::new(&self.absolute, Arc::clone(&self.probe))
    }

    /// Returns the name of the file or directory denoted by this
    /// abstract pathname.
    ///
    /// This is the last segment in the raw pathname's name sequence,
    /// or the empty string if the name sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pathio::fs::LocalFileSystem;
    /// use pathio::path::AbstractPath;
    ///
    /// let fs = Arc::new(LocalFileSystem::new());
    /// assert_eq!(AbstractPath::new("a/b/c.txt", fs.clone()).unwrap().name(), "c.txt");
    /// assert_eq!(AbstractPath::new("/", fs).unwrap().name(), "");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        let trimmed = self.raw.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }

    /// Returns the pathname string of this abstract pathname's parent.
    ///
    /// The parent is derived from the raw pathname, not the absolute
    /// one: two instances with equal absolute paths but different raw
    /// spellings can report different parents.
    #[must_use]
    pub fn parent(&self) -> String {
        normalize(&format!("{}/..", self.raw))
    }

    /// Returns the abstract pathname of this pathname's parent, or
    /// `None` if this pathname does not name a parent directory.
    ///
    /// A pathname with an empty name sequence (for example `/` or the
    /// empty pathname) has no parent.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined while
    /// resolving the parent.
    pub fn parent_file(&self) -> Result<Option<Self>> {
        let parent = self.parent();
        if parent == normalize(&self.raw) {
            // The pathname is its own parent: nothing to name.
            return Ok(None);
        }
        Self::new(&parent, Arc::clone(&self.probe)).map(Some)
    }

    /// Tests whether the file or directory denoted by this abstract
    /// pathname exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.probe.exists(&self.absolute)
    }

    /// Tests whether this abstract pathname denotes a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.probe.is_file(&self.absolute)
    }

    /// Tests whether this abstract pathname denotes a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.probe.is_directory(&self.absolute)
    }

    /// Returns the length in bytes of the file denoted by this abstract
    /// pathname, or 0 if the file does not exist.
    ///
    /// The value is unspecified when the pathname denotes a directory.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.probe.byte_length(&self.absolute)
    }
}

impl fmt::Debug for AbstractPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractPath")
            .field("raw", &self.raw)
            .field("absolute", &self.absolute)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AbstractPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute)
    }
}

impl PartialEq for AbstractPath {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.absolute == other.absolute
    }
}

impl Eq for AbstractPath {}

/// A pathname string must survive the trip to a host primitive; an
/// embedded NUL byte cannot.
fn validate_path_string(path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(Error::InvalidPath {
            path: path.to_string(),
            reason: "path contains a NUL byte".to_string(),
        });
    }
    Ok(())
}
