//! Lexical path normalization.
//!
//! This module resolves `.` and `..` components in a path without
//! touching the filesystem. Resolution is purely lexical: no existence
//! checks, no symlink following. Callers that need the real filesystem
//! identity of a path canonicalize separately (see [`crate::guard`]).

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components in an absolute path, lexically.
///
/// Current-directory components are dropped and parent-directory
/// components pop the preceding component. A `..` that would climb past
/// the filesystem root clamps at the root instead of failing, mirroring
/// the no-op semantics of `cd ..` at the root.
///
/// # Examples
///
/// ```
/// use dosh::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     resolve_components(Path::new("/a/./b/../c")),
///     PathBuf::from("/a/c")
/// );
///
/// // Climbing past the root clamps at the root
/// assert_eq!(
///     resolve_components(Path::new("/a/../../b")),
///     PathBuf::from("/b")
/// );
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Prefix/root components must never be popped by a ".."
    let mut floor = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
                floor = result.components().count();
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
                floor = result.components().count();
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // "." does not change the path
            }
            Component::ParentDir => {
                if result.components().count() > floor {
                    result.pop();
                }
                // Already at the root: clamp, not an error
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}
