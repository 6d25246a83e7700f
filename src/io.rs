//! Console input/output seams.
//!
//! The game loop talks to these traits instead of stdin/stdout so it can be
//! driven by a terminal, a scripted transcript or the automatic gunner.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Write};

/// What the game is asking the player for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Row,
    Column,
    Replay,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Row => "Row (0 to quit):",
            Prompt::Column => "Column (0 to quit):",
            Prompt::Replay => "Play again? (y/n):",
        }
    }
}

/// Source of whitespace-separated input tokens.
pub trait InputReader {
    /// Next token for `prompt`, or `None` once input is exhausted.
    fn read_token(&mut self, prompt: Prompt) -> io::Result<Option<String>>;
}

/// Sink for game output.
pub trait OutputWriter {
    /// Write a message without a newline.
    fn write(&mut self, message: &str) -> io::Result<()>;
    /// Write a message with a newline.
    fn writeln(&mut self, message: &str) -> io::Result<()>;
}

/// Reads whitespace-separated tokens from a line source, keeping the rest
/// of a line for later prompts, and writes each prompt before reading.
#[derive(Debug)]
pub struct TerminalInput<R = StdinLock<'static>, W = TerminalOutput> {
    reader: R,
    prompts: W,
    pending: VecDeque<String>,
}

impl TerminalInput {
    /// Read from stdin, prompting on stdout.
    pub fn new() -> Self {
        Self::from_reader(io::stdin().lock(), TerminalOutput)
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: OutputWriter> TerminalInput<R, W> {
    pub fn from_reader(reader: R, prompts: W) -> Self {
        Self {
            reader,
            prompts,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead, W: OutputWriter> InputReader for TerminalInput<R, W> {
    fn read_token(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.prompts.write(&format!("{} ", prompt.text()))?;
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Writes to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl OutputWriter for TerminalOutput {
    fn write(&mut self, message: &str) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(message.as_bytes())?;
        out.flush()
    }

    fn writeln(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{}", message)
    }
}

/// Discards everything; used for headless play.
#[derive(Debug, Default)]
pub struct NullOutput;

impl OutputWriter for NullOutput {
    fn write(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }

    fn writeln(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}
