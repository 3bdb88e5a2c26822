use std::io;

/// Lexical errors.
///
/// Raised by the scanner when a run of characters does not form a token:
/// stray `!`, `&` or `|` without their second character, malformed numeric
/// literals, or characters the language does not use at all.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a
/// statement tree. Every variant names what the parser expected and what it
/// actually found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, arrays used as scalars (or the other way round), out of bounds
/// indices, division by zero, unreadable numeric input and console failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that stops a running program.
///
/// Errors are fatal: the first one raised by any phase ends the run and is
/// reported to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The statement could not be scanned or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The program text could not be read.
    #[error("Failed to read source: {0}")]
    Source(#[from] io::Error),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Parse(ParseError::Lex(error))
    }
}
