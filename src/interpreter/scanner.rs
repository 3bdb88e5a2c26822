use std::collections::VecDeque;

use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::LexError,
    interpreter::{
        lexer::{LexerExtras, Spanned, Token},
        source::CharacterSource,
    },
};

/// Result type produced by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Turns a character stream into tokens on demand.
///
/// The scanner reads its source one line at a time and only when the parser
/// asks for a token beyond the ones already buffered. A statement is
/// therefore evaluated before any text after its terminating `;` line is
/// read, which is what lets a terminal session interleave statements with
/// `ввод` input.
///
/// The scanner is an [`Iterator`] over `(Token, line)` pairs. The last item is
/// [`Token::EndOfInput`] on the last line of the source, after which
/// iteration ends. After a lexical error the rest of that line is dropped.
///
/// ## Example
/// ```
/// use kirlang::interpreter::{lexer::Token, scanner::Scanner, source::StrSource};
///
/// let mut scanner = Scanner::new(StrSource::new("вывод x;"));
///
/// assert_eq!(scanner.next_token().unwrap(), Some((Token::Print, 1)));
/// assert_eq!(scanner.next_token().unwrap(),
///            Some((Token::Identifier("x".to_string()), 1)));
/// assert_eq!(scanner.next_token().unwrap(), Some((Token::Semicolon, 1)));
/// assert_eq!(scanner.next_token().unwrap(), Some((Token::EndOfInput, 1)));
/// assert_eq!(scanner.next_token().unwrap(), None);
/// ```
pub struct Scanner<S> {
    source:    S,
    pending:   VecDeque<LexResult<Spanned>>,
    /// Number of the next line to be read.
    line:      usize,
    exhausted: bool,
    finished:  bool,
}

impl<S: CharacterSource> Scanner<S> {
    /// Creates a scanner reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source,
               pending: VecDeque::new(),
               line: 1,
               exhausted: false,
               finished: false }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    /// Returns a `LexError` for malformed tokens or if the source cannot be
    /// read.
    pub fn next_token(&mut self) -> LexResult<Option<Spanned>> {
        self.next().transpose()
    }

    /// Reads characters up to and including the next `\n`.
    ///
    /// Returns `None` once the source has nothing left.
    fn read_line(&mut self) -> LexResult<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut text = String::new();
        loop {
            match self.source.read_one() {
                Ok(Some(c)) => {
                    text.push(c);
                    if c == '\n' {
                        break;
                    }
                },
                Ok(None) => {
                    self.exhausted = true;
                    break;
                },
                Err(e) => {
                    self.exhausted = true;
                    return Err(LexError::SourceUnreadable { message: e.to_string(),
                                                            line:    self.line, });
                },
            }
        }

        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    /// Reads the next source line and queues its tokens.
    ///
    /// A string literal still open at the end of the line pulls in further
    /// lines until it is closed or the source runs out, in which case it ends
    /// at end of input.
    ///
    /// Returns `false` when there is nothing left to read.
    fn fill(&mut self) -> LexResult<bool> {
        let Some(mut text) = self.read_line()? else {
            return Ok(false);
        };
        let first_line = self.line;
        self.line += 1;
        debug!(line = first_line, "scanning source line");

        loop {
            let (tokens, open_string) = lex_text(&text, first_line);
            if open_string && let Some(more) = self.read_line()? {
                text.push_str(&more);
                self.line += 1;
                continue;
            }

            self.pending.extend(tokens);
            return Ok(true);
        }
    }
}

impl<S: CharacterSource> Iterator for Scanner<S> {
    type Item = LexResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                if let Ok((token, line)) = &item {
                    trace!(%token, line, "token");
                }
                return Some(item);
            }

            match self.fill() {
                Ok(true) => {},
                Ok(false) if self.finished => return None,
                Ok(false) => {
                    self.finished = true;
                    let last_line = self.line.saturating_sub(1).max(1);
                    return Some(Ok((Token::EndOfInput, last_line)));
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Lexes a buffered chunk of source starting on `first_line`.
///
/// Lexing stops at the first error, which becomes the last item. The flag is
/// `true` when the chunk ends inside a string literal; that literal is
/// returned as a closed [`Token::Str`] so the caller may use the tokens as-is
/// once no more input is available.
fn lex_text(text: &str, first_line: usize) -> (Vec<LexResult<Spanned>>, bool) {
    let mut lexer = Token::lexer_with_extras(text, LexerExtras { line: first_line });
    let mut tokens = Vec::new();
    let mut open_string = false;

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line - lexer.slice().matches('\n').count();
        match token {
            Ok(Token::OpenStr(value)) => {
                open_string = true;
                tokens.push(Ok((Token::Str(value), line)));
            },
            Ok(tok) => tokens.push(Ok((tok, line))),
            Err(kind) => {
                tokens.push(Err(LexError::new(&kind, lexer.slice(), line)));
                break;
            },
        }
    }

    (tokens, open_string)
}
