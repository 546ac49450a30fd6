//! Recursive directory-tree metrics.
//!
//! This module computes, for any filesystem node, its kind, maximum
//! subtree depth, contained-directory count, contained-file count, and
//! the total byte size of contained files. Results are assembled into a
//! [`TreeReport`], one row per direct child of a queried directory (or
//! a single row for a queried file).
//!
//! The four traversals are independent recursive walks over the same
//! subtree. Directory sizes in this domain are small enough that the
//! repeated walks do not matter; fusing them into a single pass is a
//! possible optimization, not a correctness requirement.
//!
//! Walks never descend through directory symlinks, so link-induced
//! cycles cannot send a traversal into infinite recursion; a symlink is
//! reported as a leaf.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// The kind of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A regular file (or a symlink, reported as a leaf).
    File,
    /// A directory.
    Directory,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// One row of a tree report: the metrics for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    /// The node's base name.
    pub name: String,
    /// Whether the node is a file or a directory.
    pub kind: NodeKind,
    /// Maximum subtree depth: 1 for a file or an empty directory,
    /// `1 + max(child depth)` for a non-empty directory.
    pub max_depth: usize,
    /// Count of descendant directories at any depth.
    pub dir_count: usize,
    /// Count of descendant files at any depth (a file counts itself).
    pub file_count: usize,
    /// Total byte size of descendant files; directories themselves
    /// contribute no bytes.
    pub total_bytes: u64,
}

/// An ordered sequence of report rows, produced fresh per query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    /// The report rows, sorted by name.
    pub rows: Vec<NodeReport>,
}

impl TreeReport {
    /// Checks if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Describe a single node.
///
/// Returns `None` if the node does not exist. The node's metadata is
/// read without following a final symlink, so a symlink is described as
/// a leaf file.
#[must_use]
pub fn describe(node: &Path) -> Option<NodeReport> {
    if fs::symlink_metadata(node).is_err() {
        return None;
    }

    let name = node.file_name().map_or_else(
        || node.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );

    Some(NodeReport {
        name,
        kind: if is_real_dir(node) {
            NodeKind::Directory
        } else {
            NodeKind::File
        },
        max_depth: max_depth(node),
        dir_count: dir_count(node),
        file_count: file_count(node),
        total_bytes: total_bytes(node),
    })
}

/// Describe all direct children of a directory, sorted by name.
///
/// An unlistable directory (missing, access denied) produces an empty
/// report rather than an error.
#[must_use]
pub fn describe_children(dir: &Path) -> TreeReport {
    let mut rows: Vec<NodeReport> = children(dir)
        .iter()
        .filter_map(|child| describe(child))
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    TreeReport { rows }
}

/// Describe a queried node the way the `dir` command needs it: a
/// directory yields rows for its direct children, a file yields its own
/// single row, and a missing path yields an empty report.
#[must_use]
pub fn report(node: &Path) -> TreeReport {
    if is_real_dir(node) {
        describe_children(node)
    } else {
        TreeReport {
            rows: describe(node).into_iter().collect(),
        }
    }
}

/// Whether `path` is a directory without following a final symlink.
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

/// The direct children of `path`, or nothing if it cannot be listed.
fn children(path: &Path) -> Vec<std::path::PathBuf> {
    match fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Maximum subtree depth of a node.
///
/// A file or an empty directory has depth 1; a non-empty directory has
/// `1 + max(depth of child)` over its direct children.
#[must_use]
pub fn max_depth(node: &Path) -> usize {
    if !is_real_dir(node) {
        return 1;
    }

    children(node)
        .iter()
        .map(|child| max_depth(child))
        .max()
        .map_or(1, |deepest| 1 + deepest)
}

/// Count of descendant directories at any depth, each counted once.
#[must_use]
pub fn dir_count(node: &Path) -> usize {
    if !is_real_dir(node) {
        return 0;
    }

    children(node)
        .iter()
        .map(|child| {
            if is_real_dir(child) {
                1 + dir_count(child)
            } else {
                0
            }
        })
        .sum()
}

/// Count of descendant files at any depth. A file counts itself.
#[must_use]
pub fn file_count(node: &Path) -> usize {
    if !is_real_dir(node) {
        return 1;
    }

    children(node).iter().map(|child| file_count(child)).sum()
}

/// Total byte size of descendant files. Directories contribute no bytes
/// of their own.
#[must_use]
pub fn total_bytes(node: &Path) -> u64 {
    if !is_real_dir(node) {
        return fs::symlink_metadata(node).map_or(0, |m| m.len());
    }

    children(node).iter().map(|child| total_bytes(child)).sum()
}

/// Render a byte count with a unit suffix.
///
/// Picks the largest of B, K, M, G whose magnitude is at least 1
/// (base 1024), formatted to two decimal places for K/M/G and as an
/// integer for B.
///
/// # Examples
///
/// ```
/// use dosh::metrics::format_size;
///
/// assert_eq!(format_size(512), "512B");
/// assert_eq!(format_size(1024), "1.00K");
/// assert_eq!(format_size(1536), "1.50K");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.00M");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    const K: u64 = 1024;
    const M: u64 = K * 1024;
    const G: u64 = M * 1024;

    if size >= G {
        format!("{:.2}G", size as f64 / G as f64)
    } else if size >= M {
        format!("{:.2}M", size as f64 / M as f64)
    } else if size >= K {
        format!("{:.2}K", size as f64 / K as f64)
    } else {
        format!("{size}B")
    }
}
