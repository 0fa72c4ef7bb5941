//! Pathname resolution against a base directory.
//!
//! This module provides the `PathResolver` type, which composes a
//! parent and child pathname string into a single absolute canonical
//! string. The only filesystem knowledge it needs (whether a candidate
//! parent is an existing directory) comes from an injected
//! [`FsProbe`] capability, so the resolver is testable against a fake
//! filesystem.

use std::fmt;
use std::sync::Arc;

use crate::fs::FsProbe;
use crate::path::normalize::{dirname, normalize};

/// Resolves a child pathname string against a parent.
///
/// Resolution picks one of three compositions and normalizes the
/// result:
/// - an absolute child (leading `/` or a drive prefix) short-circuits
///   the parent entirely;
/// - a parent that the probe reports as an existing directory is joined
///   with the child;
/// - otherwise the parent is taken to name a file (or nothing at all)
///   and the child resolves as its sibling, against the parent's
///   directory.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathio::fs::LocalFileSystem;
/// use pathio::path::PathResolver;
///
/// let resolver = PathResolver::new(Arc::new(LocalFileSystem::new()));
///
/// // An absolute child ignores the parent
/// assert_eq!(resolver.resolve("/anything", "/abs/path"), "/abs/path");
///
/// // A parent that is not a directory resolves siblings
/// assert_eq!(resolver.resolve("/x/y.txt", "z.txt"), "/x/z.txt");
/// ```
#[derive(Clone)]
pub struct PathResolver {
    probe: Arc<dyn FsProbe>,
}

impl PathResolver {
    /// Creates a resolver over the given directory-existence probe.
    #[must_use]
    pub fn new(probe: Arc<dyn FsProbe>) -> Self {
        Self { probe }
    }

    /// Resolve the child pathname string against the parent.
    ///
    /// Both strings may be in any spelling; the result is always in
    /// normal form.
    #[must_use]
    pub fn resolve(&self, parent: &str, child: &str) -> String {
        if child.starts_with('/') || has_drive_prefix(child) {
            return normalize(child);
        }
        if self.probe.is_directory(parent) {
            // Relative join below an existing directory.
            normalize(&format!("{parent}/{child}"))
        } else {
            // The parent names a file or nothing: resolve as a sibling.
            log::debug!("parent {parent:?} is not a directory, resolving {child:?} as sibling");
            normalize(&format!("{}/{child}", dirname(parent)))
        }
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver").finish_non_exhaustive()
    }
}

/// Tests for a `X:/` or `X:\` drive prefix.
fn has_drive_prefix(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), Some(separator))
            if letter.is_ascii_alphabetic() && (separator == '/' || separator == '\\')
    )
}
