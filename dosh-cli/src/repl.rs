//! The interactive read loop.
//!
//! Reads lines, splits them on whitespace, hands the first token and
//! the rest to the session, and renders the outcome. A failed command
//! prints its error and the loop continues; only `exit` (or end of
//! input) leaves the shell.

use std::io::{self, BufRead, Write};

use dosh::{Error, Logger, Outcome, Session};

use crate::cli::OutputFormat;
use crate::confirm::LineConfirm;
use crate::help::HELP_TEXT;
use crate::render;

const BANNER: &str = "dosh interactive shell. Type 'help' for available commands.";
const FAREWELL: &str = "Goodbye.";

/// The interactive shell driver: a session plus its terminal streams.
pub struct Repl<R, W> {
    session: Session,
    input: R,
    output: W,
    format: OutputFormat,
    logger: Logger,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a read loop over the given streams.
    pub fn new(session: Session, input: R, output: W, format: OutputFormat, logger: Logger) -> Self {
        Self {
            session,
            input,
            output,
            format,
            logger,
        }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let format = self.format;
        writeln!(self.output, "{BANNER}")?;

        loop {
            let Self {
                session,
                input,
                output,
                logger,
                ..
            } = self;

            write!(output, "{}> ", session.working_dir().display())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // End of input leaves the shell like an exit would
                writeln!(output)?;
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }

            let tokens = tokenize(&line);
            let Some((command, args)) = tokens.split_first() else {
                continue;
            };

            if command.eq_ignore_ascii_case("help") {
                writeln!(output, "{HELP_TEXT}")?;
                continue;
            }

            let mut confirm = LineConfirm::new(&mut *input, &mut *output);

            match session.execute(command, args, &mut confirm) {
                Ok(Outcome::Exit) => {
                    writeln!(output, "{FAREWELL}")?;
                    return Ok(());
                }
                Ok(outcome) => {
                    for warning in warnings_of(&outcome) {
                        logger.warn(warning);
                    }
                    render::render(output, &outcome, format)?;
                }
                Err(Error::UnknownCommand { name }) => {
                    logger.error(&format!(
                        "unknown command '{name}'; type 'help' for available commands"
                    ));
                }
                Err(e) => logger.error(&format!("{e}")),
            }
        }
    }
}

/// The advisory warnings attached to an outcome, if any.
fn warnings_of(outcome: &Outcome) -> &[String] {
    match outcome {
        Outcome::Copied { warnings, .. } | Outcome::Moved { warnings, .. } => warnings,
        _ => &[],
    }
}

/// Split an input line into whitespace-separated tokens.
///
/// Runs of whitespace collapse; a blank line yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
