//! Fixed help text for the interactive shell.

/// The command summary printed by the `help` command and pointed at
/// when an unknown command is entered.
pub const HELP_TEXT: &str = "\
Available commands:
  cd <dir>            Change the working directory (also: '..', '.', '/')
  dir [path]          List metrics for the working directory or a path
  md <name>           Create a directory under the working directory
  rn <old> <new>      Rename a direct child of the working directory
  copy <src> [dest]   Copy a file or directory (into the working directory
                      when no destination is given)
  move <src> [dest]   Move a file or directory (copy, then delete)
  del <path>          Delete a file or directory tree (asks first)
  help                Show this summary
  exit                Leave the shell";
