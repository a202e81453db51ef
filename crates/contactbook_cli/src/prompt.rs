//! Line-based prompt helpers.
//!
//! # Invariants
//! - Only the line terminator is stripped from replies; other whitespace is kept.
//! - End of input is reported as [`Reply::Closed`], never as an error.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Answer to a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    /// Line was read but did not parse or was out of range.
    Invalid,
    /// Input reached end of stream.
    Closed,
}

/// Prompt reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for non-prompt output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<Reply<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Closed);
        }
        Ok(Reply::Value(strip_line_ending(line)))
    }

    /// Prints `prompt` and reads an integer inside `range`.
    pub fn ask_int(&mut self, prompt: &str, range: RangeInclusive<i64>) -> io::Result<Reply<i64>> {
        self.ask_choice(prompt, |value| range.contains(&value).then_some(value))
    }

    /// Prints `prompt`, reads an integer, and maps it through `choose`.
    ///
    /// Unparsable lines and numbers `choose` rejects are [`Reply::Invalid`].
    pub fn ask_choice<T>(
        &mut self,
        prompt: &str,
        choose: impl FnOnce(i64) -> Option<T>,
    ) -> io::Result<Reply<T>> {
        Ok(match self.ask_line(prompt)? {
            Reply::Value(line) => match parse_int(&line).and_then(choose) {
                Some(choice) => Reply::Value(choice),
                None => Reply::Invalid,
            },
            Reply::Invalid => Reply::Invalid,
            Reply::Closed => Reply::Closed,
        })
    }

    /// Prints `prompt` and reads a Y/N answer from the first character.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<Reply<bool>> {
        Ok(match self.ask_line(prompt)? {
            Reply::Value(line) => match line.bytes().next().map(|b| b.to_ascii_lowercase()) {
                Some(b'y') => Reply::Value(true),
                Some(b'n') => Reply::Value(false),
                _ => Reply::Invalid,
            },
            Reply::Invalid => Reply::Invalid,
            Reply::Closed => Reply::Closed,
        })
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

/// Parses an optionally signed decimal surrounded by whitespace only.
fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
