//! Path handling for the shell core.
//!
//! This module turns user-supplied path tokens into canonical absolute
//! paths and answers hierarchy questions about them.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! [`resolve`] combines the session's working directory with a raw
//! token (`.`, `..`, a root marker, a bare name, or a relative or
//! absolute path) into an absolute path with all `.` and `..`
//! components removed. Resolution is lexical: it never touches the
//! filesystem, and it carries no existence guarantee. Callers check
//! existence and type afterwards.
//!
//! ## Relationships
//!
//! [`PathRelationship`] classifies two paths as ancestor, descendant,
//! same, or unrelated. The safety predicates build on this after
//! canonicalizing live paths, so that protection decisions compare real
//! filesystem identities rather than spellings.
//!
//! # Examples
//!
//! ```
//! use dosh::path::{resolve, PathRelationship};
//! use std::path::Path;
//!
//! let wd = Path::new("/home/user/project");
//! let target = resolve(wd, "../other").unwrap();
//! assert_eq!(target, Path::new("/home/user/other"));
//!
//! let rel = PathRelationship::between(Path::new("/home/user"), wd);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod normalize;
pub mod relationship;
pub mod resolver;

// Re-export key items
pub use relationship::PathRelationship;
pub use resolver::resolve;
