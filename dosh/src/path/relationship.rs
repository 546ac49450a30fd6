//! Path relationship checking.
//!
//! This module determines how two canonical paths relate in the
//! filesystem hierarchy. The comparison is lexical; the safety
//! predicates in [`crate::guard`] canonicalize live paths first and
//! then consult these checks.

use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use dosh::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path contains the other; they live in different branches
    /// of the filesystem tree.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are normalized for comparison by removing trailing
    /// separators before checking prefix relationships.
    ///
    /// # Examples
    ///
    /// ```
    /// use dosh::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/a/b")),
    ///     PathRelationship::Ancestor
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/b"), Path::new("/a")),
    ///     PathRelationship::Descendant
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/a")),
    ///     PathRelationship::Same
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/b")),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if a path contains another path (ancestor or same).
    ///
    /// For protection purposes a path counts as containing itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use dosh::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/home/user");
    /// let file = Path::new("/home/user/file.txt");
    ///
    /// assert!(PathRelationship::contains(dir, file));
    /// assert!(PathRelationship::contains(dir, dir));
    /// assert!(!PathRelationship::contains(file, dir));
    /// ```
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        let rel = Self::between(path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }
}

/// Normalize a path for comparison purposes.
///
/// Removes a trailing separator if present (but not for the root).
fn normalize_for_comparison(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();

    if let Some(s) = p.to_str() {
        if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
            p = PathBuf::from(&s[..s.len() - 1]);
        }
    }

    p
}
