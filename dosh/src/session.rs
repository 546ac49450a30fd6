//! The command engine: session state and command dispatch.
//!
//! A [`Session`] owns exactly one piece of state, the working
//! directory, and dispatches the shell's commands against it. Commands
//! arrive pre-tokenized (a name plus argument tokens) and produce a
//! structured [`Outcome`] or an [`Error`](crate::Error); the session
//! never prints. Rendering, help text, and the read loop belong to the
//! front end.
//!
//! Sessions are plain values rather than process-global state, so
//! multiple independent sessions can run side by side (and tests do).
//!
//! A failed command never changes the working directory, and no command
//! may delete, rename in place, or relocate the working directory or
//! any of its ancestors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::metrics::{self, TreeReport};
use crate::path::resolve;
use crate::{guard, ops};

/// A yes/no collaborator consulted before a deletion is carried out.
///
/// The implementation owns the interaction details (the interactive
/// front end re-prompts until it gets a recognizable answer); the
/// session only sees the final boolean.
pub trait ConfirmPrompt {
    /// Ask the user to approve the described deletion.
    fn confirm(&mut self, description: &str) -> bool;
}

/// The structured result of a successfully dispatched command.
///
/// Exactly one outcome is produced per invocation; the renderer turns
/// it into user-facing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `cd` succeeded; the session now works here.
    ChangedDirectory(PathBuf),

    /// `dir` produced a report.
    Listing(TreeReport),

    /// `md` created this directory.
    Created(PathBuf),

    /// `rn` renamed a direct child.
    Renamed {
        /// The old path.
        from: PathBuf,
        /// The new path.
        to: PathBuf,
    },

    /// `copy` completed.
    Copied {
        /// The copied source.
        source: PathBuf,
        /// The directory the copy landed in.
        destination: PathBuf,
        /// Advisory messages (e.g. a tolerated name collision).
        warnings: Vec<String>,
    },

    /// `move` completed: the copy succeeded and the original is gone.
    Moved {
        /// The moved source (no longer present).
        source: PathBuf,
        /// The directory the source moved into.
        destination: PathBuf,
        /// Advisory messages (e.g. a tolerated name collision).
        warnings: Vec<String>,
    },

    /// `del` removed this path and everything under it.
    Deleted(PathBuf),

    /// `del` was declined at the confirmation prompt; nothing changed.
    DeletionDeclined(PathBuf),

    /// `exit` was requested; the caller should end the session.
    Exit,
}

/// An interactive shell session: the working directory plus the command
/// dispatch around it.
///
/// # Examples
///
/// ```no_run
/// use dosh::{ConfirmPrompt, Outcome, Session};
///
/// struct Yes;
/// impl ConfirmPrompt for Yes {
///     fn confirm(&mut self, _description: &str) -> bool { true }
/// }
///
/// let mut session = Session::new("/tmp").unwrap();
/// let outcome = session
///     .execute("md", &["scratch".to_string()], &mut Yes)
///     .unwrap();
/// assert!(matches!(outcome, Outcome::Created(_)));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    working_dir: PathBuf,
}

impl Session {
    /// Create a session rooted at `start_dir`.
    ///
    /// The directory is canonicalized so that every later protection
    /// check compares real filesystem identities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `start_dir` does not exist and
    /// [`Error::NotADirectory`] if it is a file.
    pub fn new(start_dir: impl Into<PathBuf>) -> Result<Self> {
        let start_dir = start_dir.into();
        let canonical = fs::canonicalize(&start_dir).map_err(|_| Error::NotFound {
            path: start_dir.clone(),
        })?;
        if !canonical.is_dir() {
            return Err(Error::NotADirectory { path: canonical });
        }
        Ok(Self {
            working_dir: canonical,
        })
    }

    /// The session's current working directory.
    ///
    /// Always an existing directory: commands that would invalidate it
    /// are refused before they touch the filesystem.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch one already-tokenized command.
    ///
    /// Command names are matched case-insensitively. `confirm` is only
    /// consulted by `del`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] for an unrecognized name, or
    /// the failure the individual command produced.
    pub fn execute(
        &mut self,
        command: &str,
        args: &[String],
        confirm: &mut dyn ConfirmPrompt,
    ) -> Result<Outcome> {
        match command.to_lowercase().as_str() {
            "cd" => {
                let [target] = expect_args::<1>("cd", "exactly one argument", args)?;
                self.cd(target)
            }
            "dir" => {
                if args.len() > 1 {
                    return Err(arity("dir", "no argument or one argument"));
                }
                self.dir(args.first().map(String::as_str))
            }
            "md" => {
                let [name] = expect_args::<1>("md", "exactly one argument", args)?;
                self.md(name)
            }
            "rn" => {
                let [from, to] = expect_args::<2>("rn", "exactly two arguments", args)?;
                self.rn(from, to)
            }
            "copy" => self.copy(args),
            "move" => self.mv(args),
            "del" => {
                let [target] = expect_args::<1>("del", "exactly one argument", args)?;
                self.del(target, confirm)
            }
            "exit" => {
                if args.is_empty() {
                    Ok(Outcome::Exit)
                } else {
                    Err(arity("exit", "no arguments"))
                }
            }
            other => Err(Error::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }

    /// Change the working directory.
    fn cd(&mut self, token: &str) -> Result<Outcome> {
        let target = resolve(&self.working_dir, token)?;

        // `.`, `..` and the root marker apply directly: they are
        // derived from the working directory, which always exists.
        if !matches!(token, "." | ".." | "/" | "\\") {
            if !target.exists() {
                return Err(Error::NotFound { path: target });
            }
            if !target.is_dir() {
                return Err(Error::NotADirectory { path: target });
            }
        }

        // Re-canonicalize so the invariant survives symlinked targets
        self.working_dir = fs::canonicalize(&target).map_err(|_| Error::NotFound {
            path: target.clone(),
        })?;
        Ok(Outcome::ChangedDirectory(self.working_dir.clone()))
    }

    /// Report on the working directory or a named node.
    ///
    /// A nonexistent argument yields an empty report rather than an
    /// error, preserving the shell's historical behavior.
    fn dir(&self, token: Option<&str>) -> Result<Outcome> {
        let report = match token {
            None => metrics::describe_children(&self.working_dir),
            Some(token) => metrics::report(&resolve(&self.working_dir, token)?),
        };
        Ok(Outcome::Listing(report))
    }

    /// Create a directory directly under the working directory.
    fn md(&self, name: &str) -> Result<Outcome> {
        validate_entry_name("md", name)?;

        let target = self.working_dir.join(name);
        if fs::symlink_metadata(&target).is_ok() {
            return Err(Error::AlreadyExists { path: target });
        }
        fs::create_dir(&target)?;
        Ok(Outcome::Created(target))
    }

    /// Rename a direct child of the working directory.
    fn rn(&self, from: &str, to: &str) -> Result<Outcome> {
        validate_entry_name("rn", from)?;
        validate_entry_name("rn", to)?;

        let old = self.working_dir.join(from);
        let new = self.working_dir.join(to);

        if fs::symlink_metadata(&old).is_err() {
            return Err(Error::NotFound { path: old });
        }
        if fs::symlink_metadata(&new).is_ok() {
            return Err(Error::AlreadyExists { path: new });
        }
        fs::rename(&old, &new)?;
        Ok(Outcome::Renamed { from: old, to: new })
    }

    /// Copy a file or directory.
    fn copy(&self, args: &[String]) -> Result<Outcome> {
        let (source, destination, blocking_collision) = self.copy_route(args)?;
        let warnings = self.check_copy(&source, &destination, blocking_collision)?;

        ops::copy_into(&source, &destination)?;
        Ok(Outcome::Copied {
            source,
            destination,
            warnings,
        })
    }

    /// Move a file or directory: copy, then delete the original.
    ///
    /// The protection check runs before the copy so a refused move
    /// leaves the filesystem untouched instead of stranding a copy.
    fn mv(&self, args: &[String]) -> Result<Outcome> {
        let (source, destination, blocking_collision) = self.copy_route(args)?;

        if guard::would_delete_protected(&source, &self.working_dir) {
            return Err(Error::ProtectedPath { path: source });
        }

        let warnings = self.check_copy(&source, &destination, blocking_collision)?;

        ops::copy_into(&source, &destination)?;
        ops::delete(&source)?;
        Ok(Outcome::Moved {
            source,
            destination,
            warnings,
        })
    }

    /// Resolve the source and destination of a copy/move invocation.
    ///
    /// The one-argument form targets the working directory and treats a
    /// name collision as blocking; the two-argument form targets a
    /// named existing directory and treats a collision as advisory.
    fn copy_route(&self, args: &[String]) -> Result<(PathBuf, PathBuf, bool)> {
        match args {
            [source] => Ok((
                resolve(&self.working_dir, source)?,
                self.working_dir.clone(),
                true,
            )),
            [source, destination] => {
                let destination = resolve(&self.working_dir, destination)?;
                if !destination.exists() {
                    return Err(Error::NotFound { path: destination });
                }
                if !destination.is_dir() {
                    return Err(Error::NotADirectory { path: destination });
                }
                Ok((resolve(&self.working_dir, source)?, destination, false))
            }
            _ => Err(arity("copy", "one or two arguments")),
        }
    }

    /// Run the pre-copy safety checks, returning advisory warnings.
    fn check_copy(
        &self,
        source: &Path,
        destination: &Path,
        blocking_collision: bool,
    ) -> Result<Vec<String>> {
        if !source.exists() {
            return Err(Error::NotFound {
                path: source.to_path_buf(),
            });
        }

        let mut warnings = Vec::new();
        if guard::name_collision(source, destination) {
            let name = source
                .file_name()
                .map(std::ffi::OsStr::to_os_string)
                .unwrap_or_default();
            let target = destination.join(&name);
            // A collision with the source itself means the destination
            // is the source's own parent; proceeding would truncate the
            // source before it is read. Always blocking.
            if blocking_collision || guard::same_node(source, &target) {
                return Err(Error::AlreadyExists { path: target });
            }
            warnings.push(format!(
                "'{}' already exists in '{}'",
                name.to_string_lossy(),
                destination.display()
            ));
        }

        if guard::would_create_cycle(source, destination) {
            return Err(Error::CyclicCopy {
                from: source.to_path_buf(),
                destination: destination.to_path_buf(),
            });
        }

        Ok(warnings)
    }

    /// Delete a file or directory tree after confirmation.
    ///
    /// The protection check runs before the prompt: deleting the
    /// working directory or an ancestor is refused regardless of what
    /// the user would have answered.
    fn del(&self, token: &str, confirm: &mut dyn ConfirmPrompt) -> Result<Outcome> {
        let target = resolve(&self.working_dir, token)?;

        if fs::symlink_metadata(&target).is_err() {
            return Err(Error::NotFound { path: target });
        }
        if guard::would_delete_protected(&target, &self.working_dir) {
            return Err(Error::ProtectedPath { path: target });
        }

        let description = format!(
            "delete '{}' and everything under it",
            target.display()
        );
        if !confirm.confirm(&description) {
            return Ok(Outcome::DeletionDeclined(target));
        }

        ops::delete(&target)?;
        Ok(Outcome::Deleted(target))
    }
}

/// Build an arity error for `command`.
fn arity(command: &str, expected: &str) -> Error {
    Error::Arity {
        command: command.to_string(),
        expected: expected.to_string(),
    }
}

/// Require exactly `N` arguments, returned as string slices.
fn expect_args<'a, const N: usize>(
    command: &str,
    expected: &str,
    args: &'a [String],
) -> Result<[&'a str; N]> {
    if args.len() == N {
        let mut out = [""; N];
        for (slot, arg) in out.iter_mut().zip(args) {
            *slot = arg.as_str();
        }
        Ok(out)
    } else {
        Err(arity(command, expected))
    }
}

/// Validate a bare entry name for `md`/`rn`.
///
/// Names must stay directly under the working directory: separators and
/// colons are rejected, as are the `.`/`..` pseudo-entries.
fn validate_entry_name(command: &str, name: &str) -> Result<()> {
    if name == "." || name == ".." {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: format!("'{command}' does not operate on '.' or '..'"),
        });
    }
    if name.contains(['/', '\\', ':']) {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "must not contain slashes or colons".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// A confirmation prompt with a fixed answer.
    struct Always(bool);

    impl ConfirmPrompt for Always {
        fn confirm(&mut self, _description: &str) -> bool {
            self.0
        }
    }

    fn run(session: &mut Session, command: &str, args: &[&str]) -> Result<Outcome> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        session.execute(command, &args, &mut Always(true))
    }

    #[test]
    fn test_new_session_requires_existing_directory() {
        let dir = tempdir().unwrap();
        assert!(Session::new(dir.path()).is_ok());
        assert!(Session::new(dir.path().join("ghost")).is_err());
    }

    #[test]
    fn test_cd_into_subdirectory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let outcome = run(&mut session, "cd", &["sub"]).unwrap();
        assert!(matches!(outcome, Outcome::ChangedDirectory(_)));
        assert!(session.working_dir().ends_with("sub"));
    }

    #[test]
    fn test_cd_missing_target_leaves_working_dir() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        let before = session.working_dir().to_path_buf();

        let err = run(&mut session, "cd", &["ghost"]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.working_dir(), before);
    }

    #[test]
    fn test_cd_into_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "cd", &["f"]).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_cd_dotdot_and_dot() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut session = Session::new(dir.path().join("sub")).unwrap();

        run(&mut session, "cd", &["."]).unwrap();
        assert!(session.working_dir().ends_with("sub"));

        run(&mut session, "cd", &[".."]).unwrap();
        assert_eq!(
            session.working_dir(),
            fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[test]
    fn test_cd_dotdot_at_root_is_noop() {
        let mut session = Session::new("/").unwrap();
        run(&mut session, "cd", &[".."]).unwrap();
        assert_eq!(session.working_dir(), Path::new("/"));
    }

    #[test]
    fn test_cd_arity() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        assert!(matches!(
            run(&mut session, "cd", &[]),
            Err(Error::Arity { .. })
        ));
        assert!(matches!(
            run(&mut session, "cd", &["a", "b"]),
            Err(Error::Arity { .. })
        ));
    }

    #[test]
    fn test_dir_lists_working_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let Outcome::Listing(report) = run(&mut session, "dir", &[]).unwrap() else {
            panic!("expected a listing");
        };
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_dir_on_missing_argument_is_empty_listing() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let Outcome::Listing(report) = run(&mut session, "dir", &["ghost"]).unwrap() else {
            panic!("expected a listing");
        };
        assert!(report.is_empty());
    }

    #[test]
    fn test_dir_arity() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        assert!(matches!(
            run(&mut session, "dir", &["a", "b"]),
            Err(Error::Arity { .. })
        ));
    }

    #[test]
    fn test_md_creates_directory() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        run(&mut session, "md", &["fresh"]).unwrap();
        assert!(dir.path().join("fresh").is_dir());
    }

    #[test]
    fn test_md_rejects_existing_name() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        assert!(matches!(
            run(&mut session, "md", &["taken"]),
            Err(Error::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_md_rejects_separators() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        for bad in ["a/b", "a\\b", "a:b", ".", ".."] {
            assert!(
                matches!(
                    run(&mut session, "md", &[bad]),
                    Err(Error::InvalidName { .. })
                ),
                "expected InvalidName for {bad:?}"
            );
        }
    }

    #[test]
    fn test_rn_roundtrip_visible_in_dir() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        run(&mut session, "md", &["X"]).unwrap();
        run(&mut session, "rn", &["X", "Y"]).unwrap();

        let Outcome::Listing(report) = run(&mut session, "dir", &[]).unwrap() else {
            panic!("expected a listing");
        };
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Y"]);
    }

    #[test]
    fn test_rn_failures() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "x").unwrap();
        fs::write(dir.path().join("b"), "y").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        assert!(matches!(
            run(&mut session, "rn", &["ghost", "c"]),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            run(&mut session, "rn", &["a", "b"]),
            Err(Error::AlreadyExists { .. })
        ));
        assert!(matches!(
            run(&mut session, "rn", &["a", "c/d"]),
            Err(Error::InvalidName { .. })
        ));
        assert!(matches!(
            run(&mut session, "rn", &["a"]),
            Err(Error::Arity { .. })
        ));
    }

    #[test]
    fn test_copy_single_argument_blocks_on_collision() {
        let dir = tempdir().unwrap();
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir(&elsewhere).unwrap();
        fs::write(elsewhere.join("f"), "new").unwrap();
        fs::write(dir.path().join("f"), "old").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "copy", &["elsewhere/f"]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("f")).unwrap(), "old");
    }

    #[test]
    fn test_copy_single_argument_into_working_dir() {
        let dir = tempdir().unwrap();
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir(&elsewhere).unwrap();
        fs::write(elsewhere.join("f"), "data").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let outcome = run(&mut session, "copy", &["elsewhere/f"]).unwrap();
        assert!(matches!(outcome, Outcome::Copied { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("f")).unwrap(), "data");
    }

    #[test]
    fn test_copy_two_argument_collision_is_warning() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(src.join("inner")).unwrap();
        fs::create_dir_all(dst.join("src")).unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let Outcome::Copied { warnings, .. } =
            run(&mut session, "copy", &["src", "dst"]).unwrap()
        else {
            panic!("expected a copy outcome");
        };
        assert_eq!(warnings.len(), 1);
        assert!(dst.join("src").join("inner").is_dir());
    }

    #[test]
    fn test_copy_file_into_its_own_parent_is_refused() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "precious payload").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "copy", &["f", "."]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("f")).unwrap(),
            "precious payload"
        );
    }

    #[test]
    fn test_move_file_into_its_own_parent_leaves_file_intact() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "precious payload").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "move", &["f", "."]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("f")).unwrap(),
            "precious payload"
        );
    }

    #[test]
    fn test_copy_directory_into_its_own_parent_is_refused() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "copy", &["sub", "."]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(sub.join("f")).unwrap(), "x");
    }

    #[test]
    fn test_copy_cycle_is_refused() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "copy", &["src", "src/nested"]).unwrap_err();
        assert!(matches!(err, Error::CyclicCopy { .. }));
    }

    #[test]
    fn test_copy_missing_destination() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        assert!(matches!(
            run(&mut session, "copy", &["f", "ghost"]),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_copy_destination_must_be_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        fs::write(dir.path().join("g"), "y").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        assert!(matches!(
            run(&mut session, "copy", &["f", "g"]),
            Err(Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_move_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();
        fs::write(src.join("f"), "payload").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let outcome = run(&mut session, "move", &["src/f", "dst"]).unwrap();
        assert!(matches!(outcome, Outcome::Moved { .. }));
        assert!(!src.join("f").exists());
        assert_eq!(fs::read_to_string(dst.join("f")).unwrap(), "payload");
    }

    #[test]
    fn test_move_working_directory_is_protected() {
        let dir = tempdir().unwrap();
        let wd = dir.path().join("wd");
        let dst = dir.path().join("dst");
        fs::create_dir(&wd).unwrap();
        fs::create_dir(&dst).unwrap();
        let mut session = Session::new(&wd).unwrap();

        let err = run(&mut session, "move", &["../wd", "../dst"]).unwrap_err();
        assert!(err.is_protected());
        assert!(wd.is_dir());
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 0);
    }

    #[test]
    fn test_move_into_descendant_is_cyclic_and_leaves_tree_unchanged() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let nested = src.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(src.join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let err = run(&mut session, "move", &["src", "src/nested"]).unwrap_err();
        assert!(matches!(err, Error::CyclicCopy { .. }));
        assert!(src.join("f").is_file());
        assert_eq!(fs::read_dir(&nested).unwrap().count(), 0);
    }

    #[test]
    fn test_del_working_directory_is_protected_regardless_of_confirmation() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        for answer in [true, false] {
            let err = session
                .execute("del", &[".".to_string()], &mut Always(answer))
                .unwrap_err();
            assert!(err.is_protected());
        }
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_del_ancestor_is_protected() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let mut session = Session::new(&nested).unwrap();

        let err = run(&mut session, "del", &["../../"]).unwrap_err();
        assert!(err.is_protected());
    }

    #[test]
    fn test_del_declined_is_a_noop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let outcome = session
            .execute("del", &["f".to_string()], &mut Always(false))
            .unwrap();
        assert!(matches!(outcome, Outcome::DeletionDeclined(_)));
        assert!(dir.path().join("f").exists());
    }

    #[test]
    fn test_del_removes_tree() {
        let dir = tempdir().unwrap();
        let doomed = dir.path().join("doomed");
        fs::create_dir_all(doomed.join("inner")).unwrap();
        fs::write(doomed.join("inner").join("f"), "x").unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        let outcome = run(&mut session, "del", &["doomed"]).unwrap();
        assert!(matches!(outcome, Outcome::Deleted(_)));
        assert!(!doomed.exists());
    }

    #[test]
    fn test_del_missing_target() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();

        assert!(run(&mut session, "del", &["ghost"]).unwrap_err().is_not_found());
    }

    #[test]
    fn test_exit() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        assert!(matches!(
            run(&mut session, "exit", &[]).unwrap(),
            Outcome::Exit
        ));
        assert!(matches!(
            run(&mut session, "exit", &["now"]),
            Err(Error::Arity { .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        assert!(matches!(
            run(&mut session, "frobnicate", &[]),
            Err(Error::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_command_names_are_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(dir.path()).unwrap();
        run(&mut session, "MD", &["upper"]).unwrap();
        assert!(dir.path().join("upper").is_dir());
    }
}
