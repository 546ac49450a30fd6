//! Safety predicates consulted before destructive or structural
//! operations.
//!
//! Every predicate here reads live filesystem state on each call;
//! nothing is cached, so answers are never internally stale. The
//! predicates are pure decision functions: they never mutate and never
//! print. Callers translate a `true` result into the appropriate
//! refusal from the error taxonomy.
//!
//! Comparisons are made on canonical paths (symlink-resolved real
//! identities), so two spellings of the same directory cannot dodge a
//! protection check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::path::PathRelationship;

/// Canonicalize a path, treating any failure as "not there".
///
/// Nonexistent or unreadable inputs make the predicates answer `false`
/// rather than raise; the session reports missing paths separately.
fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}

/// Check whether `candidate` is `of` itself or one of its ancestors.
///
/// Walks canonical identities: `candidate` counts as an ancestor of
/// `of` when its canonical path equals `of`'s or any element of `of`'s
/// parent chain up to the filesystem root. Self counts as ancestor for
/// protection purposes. Returns `false` if either path does not exist.
///
/// # Examples
///
/// ```no_run
/// use dosh::guard::is_ancestor;
/// use std::path::Path;
///
/// assert!(is_ancestor(Path::new("/tmp"), Path::new("/tmp")));
/// assert!(is_ancestor(Path::new("/"), Path::new("/tmp")));
/// assert!(!is_ancestor(Path::new("/tmp"), Path::new("/")));
/// ```
#[must_use]
pub fn is_ancestor(candidate: &Path, of: &Path) -> bool {
    let (Some(candidate), Some(of)) = (canonical(candidate), canonical(of)) else {
        return false;
    };
    PathRelationship::contains(&candidate, &of)
}

/// Check whether deleting `target` would take out the working directory
/// or one of its ancestors.
///
/// `del` and the deletion step of `move` must refuse when this holds.
#[must_use]
pub fn would_delete_protected(target: &Path, working_dir: &Path) -> bool {
    is_ancestor(target, working_dir)
}

/// Check whether copying or moving `source` into `destination_dir`
/// would recurse forever.
///
/// True iff `source` is a directory and `destination_dir` is `source`
/// itself or one of its descendants: the copy would re-enter its own
/// output. Files can never create a cycle.
#[must_use]
pub fn would_create_cycle(source: &Path, destination_dir: &Path) -> bool {
    source.is_dir() && is_ancestor(source, destination_dir)
}

/// Check whether two paths name the same filesystem node.
///
/// Compares canonical identities, so two spellings of one node (or a
/// symlink and its target) compare equal. A missing path matches
/// nothing.
#[must_use]
pub fn same_node(path1: &Path, path2: &Path) -> bool {
    match (canonical(path1), canonical(path2)) {
        (Some(p1), Some(p2)) => p1 == p2,
        _ => false,
    }
}

/// Check whether `destination_dir` already has a direct child sharing
/// `source`'s base name.
///
/// An unlistable destination (missing, access denied) reports no
/// collision; the caller's existence checks cover those cases.
#[must_use]
pub fn name_collision(source: &Path, destination_dir: &Path) -> bool {
    let Some(name) = source.file_name() else {
        return false;
    };
    match fs::read_dir(destination_dir) {
        Ok(entries) => entries
            .filter_map(std::result::Result::ok)
            .any(|entry| entry.file_name() == name),
        Err(_) => false,
    }
}
