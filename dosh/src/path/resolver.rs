//! Resolution of user-supplied path tokens.
//!
//! A path token is whatever the tokenizer handed us for a path
//! argument: `.`, `..`, a root marker, a bare name, or a path with
//! separators, in relative or absolute form. Resolution turns the token
//! plus the session's working directory into a canonical absolute path.
//!
//! Resolution is purely lexical and never touches the filesystem;
//! callers check existence and type afterwards against live state.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;

/// Resolve a raw path token against a base directory.
///
/// - An absolute token is resolved on its own, ignoring `base`.
/// - A root marker (`/` or `\`) resolves to the filesystem root of
///   `base`.
/// - `..` resolves to `base`'s parent; at the root it resolves to
///   `base` unchanged (a no-op, not an error).
/// - `.` resolves to `base` unchanged.
/// - Anything else is treated as a name or relative path and joined
///   onto `base`, with `.` and `..` components resolved lexically.
///
/// `base` must already be an absolute path; the session's working
/// directory always is.
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] if the token is empty. The tokenizer
/// never emits empty tokens, so this is unreachable in normal use.
///
/// # Examples
///
/// ```
/// use dosh::path::resolve;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/home/user");
///
/// assert_eq!(resolve(base, "docs").unwrap(), PathBuf::from("/home/user/docs"));
/// assert_eq!(resolve(base, "..").unwrap(), PathBuf::from("/home"));
/// assert_eq!(resolve(base, ".").unwrap(), PathBuf::from("/home/user"));
/// assert_eq!(resolve(base, "/").unwrap(), PathBuf::from("/"));
/// assert_eq!(resolve(base, "/etc").unwrap(), PathBuf::from("/etc"));
/// ```
pub fn resolve(base: &Path, token: &str) -> Result<PathBuf> {
    if token.is_empty() {
        return Err(Error::InvalidToken {
            reason: "empty path token".to_string(),
        });
    }

    if token == "/" || token == "\\" {
        return Ok(root_of(base));
    }

    match token {
        ".." => {
            // At the root there is no parent; stay put
            return Ok(base.parent().unwrap_or(base).to_path_buf());
        }
        "." => return Ok(base.to_path_buf()),
        _ => {}
    }

    let candidate = Path::new(token);
    if candidate.is_absolute() {
        Ok(resolve_components(candidate))
    } else {
        Ok(resolve_components(&base.join(candidate)))
    }
}

/// The filesystem root that `base` lives under.
///
/// On Unix this is always `/`; on Windows it is the drive or prefix
/// component of `base`.
///
/// # Examples
///
/// ```
/// use dosh::path::resolver::root_of;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(root_of(Path::new("/home/user")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn root_of(base: &Path) -> PathBuf {
    base.ancestors()
        .last()
        .map_or_else(|| base.to_path_buf(), Path::to_path_buf)
}
