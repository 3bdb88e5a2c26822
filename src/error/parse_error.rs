use crate::error::LexError;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The scanner failed to produce the next token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A specific token was required but a different one was found.
    #[error("Parse error on line {line}: Expected {expected}, found {found}.")]
    Expected {
        /// Description of the required token.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Input ended in the middle of a statement.
    #[error("Parse error on line {line}: Expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// Description of the required token.
        expected: String,
        /// The last line of the source.
        line:     usize,
    },
    /// A token that cannot start an expression.
    #[error("Parse error on line {line}: Unexpected token {found}.")]
    UnexpectedToken {
        /// Description of the token found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array size that is not a usable element count.
    #[error("Parse error on line {line}: Invalid array size {size:?}.")]
    InvalidArraySize {
        /// The size as written.
        size: f64,
        /// The source line where the error occurred.
        line: usize,
    },
}
