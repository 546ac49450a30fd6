//! Recursive copy and delete primitives.
//!
//! These are the mechanism half of the shell's destructive operations:
//! policy (protection, cycle, collision checks) lives in
//! [`crate::guard`] and is applied by the session before anything here
//! runs. The primitives themselves do not re-check it.
//!
//! A failure partway through a recursive copy or delete leaves whatever
//! subset of the tree was already processed in place; there is no
//! transactional rollback.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Copy `source` into `destination_dir`.
///
/// A file is copied byte-for-byte into a new file named after `source`
/// inside `destination_dir`. A directory is recreated as
/// `destination_dir/<source name>` with every descendant file and
/// subdirectory copied recursively, creating intermediate directories
/// as needed. Overwriting is never implicit: the caller has already
/// rejected (or chosen to tolerate) name collisions.
///
/// Directory symlinks and special files inside the source tree are
/// skipped rather than followed, so a link back into the tree cannot
/// recurse forever; file symlinks are copied through to their
/// referent's bytes.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `source` does not exist, or
/// [`Error::Io`] if a read, create, or write fails mid-copy.
pub fn copy_into(source: &Path, destination_dir: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: source.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let name = source.file_name().ok_or_else(|| Error::InvalidToken {
        reason: format!("'{}' has no base name to copy under", source.display()),
    })?;
    let target = destination_dir.join(name);

    if metadata.is_dir() {
        copy_tree(source, &target)
    } else {
        copy_file(source, &target)
    }
}

/// Copy a single file byte-for-byte.
///
/// Both handles are scoped to this function, so descriptors are closed
/// on every exit path, including errors.
fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source)?;
    let mut writer = File::create(target)?;
    io::copy(&mut reader, &mut writer)?;
    Ok(())
}

/// Recursively recreate `source`'s subtree at `target`.
fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let child_target = target.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            copy_tree(&entry.path(), &child_target)?;
        } else if file_type.is_file() {
            copy_file(&entry.path(), &child_target)?;
        } else if entry.path().is_file() {
            // File symlink: copy the referent's bytes
            copy_file(&entry.path(), &child_target)?;
        }
        // Directory symlinks and special files are skipped
    }

    Ok(())
}

/// Recursively delete a file or directory tree.
///
/// Removal is post-order: all children of a directory are deleted
/// first, then the now-empty directory itself; a leaf file is removed
/// directly. Deleting an already-removed path is success, not an error,
/// which also makes the operation tolerant of concurrent external
/// deletion.
///
/// The caller is responsible for the working-directory protection
/// check; this function does not re-check it.
///
/// # Errors
///
/// Returns [`Error::Io`] if a removal fails for a reason other than the
/// path already being gone.
pub fn delete(target: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(target) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::Io(e)),
    };

    if metadata.is_dir() {
        for entry in fs::read_dir(target)? {
            delete(&entry?.path())?;
        }
        ignore_missing(fs::remove_dir(target))
    } else {
        // Files and symlinks are removed directly; a symlink's target
        // is left alone
        ignore_missing(fs::remove_file(target))
    }
}

/// Treat "already gone" as success.
fn ignore_missing(result: io::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}
