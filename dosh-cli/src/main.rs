//! Main entry point for the dosh shell.
//!
//! This is the interactive front end: it parses the startup options,
//! builds a session rooted at the requested directory, and hands
//! control to the read loop. All command semantics live in the `dosh`
//! library.

mod cli;
mod confirm;
mod help;
mod render;
mod repl;

use std::io;

use clap::Parser;
use cli::Cli;
use dosh::Session;
use repl::Repl;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = dosh::init_logger(cli.verbose, cli.quiet);

    // Seed the working directory from --start-dir or the process cwd
    let start_dir = match cli.start_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine the current directory: {e}");
                std::process::exit(1);
            }
        },
    };

    let session = match Session::new(start_dir) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut repl = Repl::new(session, stdin, stdout, cli.format, logger);

    match repl.run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
