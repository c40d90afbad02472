//! Validated input reader.
//!
//! Writes a prompt, reads one line, and keeps asking until the answer passes
//! validation. Rejected answers are reported with the caller's error message
//! and never escape as errors; only end of input and I/O failures do.

use crate::error::{DepositError, InvalidInput, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Parses a base-10 integer and checks it against the inclusive range `[min, max]`.
///
/// Surrounding whitespace is ignored.
pub fn parse_int(raw: &str, min: i64, max: i64) -> std::result::Result<i64, InvalidInput> {
    let value: i64 = raw.trim().parse()?;
    if value < min || value > max {
        return Err(InvalidInput::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// Trims an answer and rejects it if nothing is left.
pub fn parse_string(raw: &str) -> std::result::Result<String, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    Ok(trimmed.to_string())
}

/// Line-oriented prompt/answer reader over any buffered input and writer.
pub struct InputReader<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InputReader {
            input,
            output,
            line: String::new(),
        }
    }

    /// Asks for an integer in `[min, max]` until one is given.
    pub fn read_int(
        &mut self,
        prompt: &str,
        error_message: &str,
        min: i64,
        max: i64,
    ) -> Result<i64> {
        self.read_valid(prompt, error_message, |raw| parse_int(raw, min, max))
    }

    /// Asks for a non-empty string until one is given. Returns it trimmed.
    pub fn read_string(&mut self, prompt: &str, error_message: &str) -> Result<String> {
        self.read_valid(prompt, error_message, parse_string)
    }

    /// Writer the prompts go to, for printing results after the dialogue.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_valid<T, F>(&mut self, prompt: &str, error_message: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, InvalidInput>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(DepositError::EndOfInput {
                    prompt: prompt.trim_end().trim_end_matches(':').trim_end().to_string(),
                });
            }

            match parse(&self.line) {
                Ok(value) => {
                    debug!("Accepted answer {:?}", self.line.trim_end());
                    return Ok(value);
                }
                Err(e) => {
                    warn!("Rejected answer {:?}: {}", self.line.trim_end(), e);
                    writeln!(self.output, "{}", error_message)?;
                }
            }
        }
    }
}
