//! Interactive yes/no confirmation against a line-based input.
//!
//! The shell re-prompts until it reads a recognizable answer, so a
//! stray keystroke never counts as consent to a deletion. End of input
//! counts as a decline.

use std::io::{BufRead, Write};

use dosh::ConfirmPrompt;

/// A [`ConfirmPrompt`] that reads answers line by line.
///
/// `Y`/`yes` confirms and `N`/`no` declines, case-insensitively; any
/// other line repeats the question.
pub struct LineConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LineConfirm<'a, R, W> {
    /// Create a confirmation prompt over the given streams.
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt for LineConfirm<'_, R, W> {
    fn confirm(&mut self, description: &str) -> bool {
        loop {
            if write!(self.output, "About to {description}. Continue? [Y/N] ").is_err()
                || self.output.flush().is_err()
            {
                return false;
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }
}
