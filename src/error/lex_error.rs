/// What went wrong while forming a token.
///
/// Logos requires its error type to be `Default`; the default is the generic
/// "no token starts here" case, which the scanner refines using the offending
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts with this character sequence.
    #[default]
    UnrecognizedInput,
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    MalformedNumber,
}

/// Represents a malformed token found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `!`, `&` or `|` that is not part of `!=`, `&&` or `||`.
    #[error("Lex error on line {line}: '{text}' is not an operator. Did you mean '{suggestion}'?")]
    IncompleteOperator {
        /// The lone character.
        text:       String,
        /// The two-character operator it probably belongs to.
        suggestion: &'static str,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// A numeric literal that does not parse as a float.
    #[error("Lex error on line {line}: Malformed number '{text}'.")]
    MalformedNumber {
        /// The literal text as written.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The character source failed while the scanner was reading it.
    #[error("Lex error on line {line}: Failed to read source: {message}")]
    SourceUnreadable {
        /// The underlying I/O failure, rendered.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A character that cannot start any token.
    #[error("Lex error on line {line}: Unexpected character '{text}'.")]
    UnexpectedCharacter {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Builds the error for `text` on `line` from the kind logos reported.
    #[must_use]
    pub fn new(kind: &LexErrorKind, text: &str, line: usize) -> Self {
        let suggestion = match text.chars().next() {
            Some('!') => Some("!="),
            Some('&') => Some("&&"),
            Some('|') => Some("||"),
            _ => None,
        };

        match (kind, suggestion) {
            (LexErrorKind::MalformedNumber, _) => Self::MalformedNumber { text: text.to_string(),
                                                                          line },
            (_, Some(suggestion)) => Self::IncompleteOperator { text: text[..1].to_string(),
                                                                suggestion,
                                                                line },
            (_, None) => Self::UnexpectedCharacter { text: text.to_string(),
                                                     line },
        }
    }

    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IncompleteOperator { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::SourceUnreadable { line, .. }
            | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}
