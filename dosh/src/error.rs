//! Error types for the dosh library.
//!
//! This module provides the error taxonomy for all shell operations,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a dosh error.
///
/// # Examples
///
/// ```
/// use dosh::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dosh library.
///
/// Every command produces exactly one structured outcome per invocation;
/// these variants are the failure half of that contract. The safety
/// predicates themselves never raise for ordinary "is not" conditions —
/// the session interprets their boolean answers into this taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// A command was invoked with the wrong number of arguments.
    #[error("command '{command}' takes {expected}")]
    Arity {
        /// The command that was invoked.
        command: String,
        /// A description of the expected argument count.
        expected: String,
    },

    /// A malformed name was supplied where a bare entry name is required.
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// The reason the name is invalid.
        reason: String,
    },

    /// A malformed path token was supplied.
    #[error("invalid path token: {reason}")]
    InvalidToken {
        /// The reason the token is invalid.
        reason: String,
    },

    /// The referenced path does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A directory was expected but the path refers to a file.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// A name collision where collision is blocking.
    #[error("already exists: {}", path.display())]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
    },

    /// A copy or move whose destination is the source itself or one of
    /// its descendants, which would require infinite recursion.
    ///
    /// The field is named `from` rather than `source` because thiserror
    /// reserves that name for the error-chain source.
    #[error("cyclic copy: {} is {} or one of its ancestors", from.display(), destination.display())]
    CyclicCopy {
        /// The source of the copy or move.
        from: PathBuf,
        /// The destination directory.
        destination: PathBuf,
    },

    /// The target is the working directory or one of its ancestors.
    #[error("protected path: {} is the working directory or an ancestor of it", path.display())]
    ProtectedPath {
        /// The protected path.
        path: PathBuf,
    },

    /// The command name is not one the session understands.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized command name.
        name: String,
    },

    /// An underlying read/write/create/delete call failed for a reason
    /// outside this taxonomy (disk full, permission denied mid-operation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error indicates a missing path.
    ///
    /// # Examples
    ///
    /// ```
    /// use dosh::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error indicates a refused destructive operation on
    /// the working directory or one of its ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use dosh::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ProtectedPath { path: PathBuf::from("/home/user") };
    /// assert!(err.is_protected());
    /// ```
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::ProtectedPath { .. })
    }
}
