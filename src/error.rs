//! Error types for the deposit calculator.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, DepositError>;

/// Errors that abort an input session.
#[derive(Error, Debug)]
pub enum DepositError {
    /// Failed to read from input or write to output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream closed before a valid answer arrived
    #[error("Input ended before a valid value was entered for \"{prompt}\"")]
    EndOfInput { prompt: String },
}

/// A rejected answer.
///
/// The input reader recovers from these by printing the error message and
/// asking again, so they never reach the caller of `read_int`/`read_string`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Not a base-10 integer (or does not fit in `i64`)
    #[error("not an integer: {0}")]
    NotAnInteger(#[from] ParseIntError),

    /// Integer outside the inclusive bounds
    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Nothing left after trimming whitespace
    #[error("empty answer")]
    Empty,
}
