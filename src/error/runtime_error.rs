use std::io;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a variable or array that was never declared.
    #[error("Name error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value or slot had an unexpected or incompatible type.
    #[error("Type error on line {line}: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access an array element outside the array.
    #[error("Index error on line {line}: Index {index} is out of bounds for array '{name}' of length {len}.")]
    IndexOutOfBounds {
        /// The name of the array.
        name:  String,
        /// The index that was requested.
        index: f64,
        /// The length of the array.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array declaration asked for more elements than can be allocated.
    #[error("Memory error on line {line}: Cannot allocate {len} elements for array '{name}'.")]
    ArrayTooLarge {
        /// The name of the array.
        name: String,
        /// The requested number of elements.
        len:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Division error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The console returned a line that is not a number.
    #[error("Format error on line {line}: '{text}' is not a number.")]
    InvalidNumber {
        /// The line as read.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The console had no more input to read.
    #[error("Format error on line {line}: Input ended while reading a number.")]
    EndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the console failed.
    #[error("Console error on line {line}: {source}")]
    Console {
        /// The underlying I/O error.
        source: io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
