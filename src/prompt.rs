//! Input/output collaborator for interactive sessions.
//!
//! The session never touches stdin/stdout directly; it talks to a
//! [`Prompter`]. [`Console`] is the real terminal (or any reader/writer
//! pair), [`Scripted`] replays answers supplied up front.

use crate::error::{MadlibError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something that can show text to the user and ask for a line back.
pub trait Prompter {
    /// Show one line of text.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` when the input is exhausted. The trailing line
    /// ending is not included in the answer.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompter backed by a line reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(write_failed)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).map_err(write_failed)?;
        self.output.flush().map_err(write_failed)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| MadlibError::Io(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(strip_line_ending(line)))
    }
}

/// Prompter that answers from a fixed list and records everything shown.
pub struct Scripted<W> {
    answers: VecDeque<String>,
    output: W,
}

impl<W: Write> Scripted<W> {
    pub fn new(answers: impl IntoIterator<Item = String>, output: W) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            output,
        }
    }

    /// Consume the prompter, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Prompter for Scripted<W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(write_failed)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.answers.pop_front();
        // Echo the answer so the transcript reads like a terminal session.
        writeln!(self.output, "{}{}", prompt, answer.as_deref().unwrap_or(""))
            .map_err(write_failed)?;
        Ok(answer)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn write_failed(e: io::Error) -> MadlibError {
    MadlibError::Io(format!("failed to write output: {}", e))
}
