use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
        scanner::LexResult,
    },
};

/// Looks at the next token without consuming it.
///
/// Pulling the token may make the scanner read more source; a lexical error
/// found while doing so is reported here.
///
/// # Returns
/// The token and its line, or `None` at end of input. The
/// [`Token::EndOfInput`] marker is left in place for [`end_of_input`].
pub(in crate::interpreter::parser) fn peek<'t, I>(tokens: &'t mut Peekable<I>)
                                                  -> ParseResult<Option<(&'t Token, usize)>>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match tokens.peek() {
        Some(Ok((Token::EndOfInput, _))) | None => Ok(None),
        Some(Ok((token, line))) => Ok(Some((token, *line))),
        Some(Err(e)) => Err(e.clone().into()),
    }
}

/// Builds the error for input that ended where `expected` was required.
///
/// The line is taken from the scanner's end-of-input marker; a stream that
/// ends without one reports line 0.
pub(in crate::interpreter::parser) fn end_of_input<I>(tokens: &mut Peekable<I>,
                                                      expected: &str)
                                                      -> ParseError
    where I: Iterator<Item = LexResult<Spanned>>
{
    let line = match tokens.peek() {
        Some(Ok((Token::EndOfInput, line))) => *line,
        _ => 0,
    };

    ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                       line }
}

/// Returns `true` if the next token is `expected`. Nothing is consumed.
pub(in crate::interpreter::parser) fn peek_is<I>(tokens: &mut Peekable<I>,
                                                 expected: &Token)
                                                 -> ParseResult<bool>
    where I: Iterator<Item = LexResult<Spanned>>
{
    Ok(matches!(peek(tokens)?, Some((token, _)) if token == expected))
}

/// Consumes the next token.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput`, naming `expected`, if the
/// input is exhausted, or the lexical error the scanner reported.
pub(in crate::interpreter::parser) fn next_token<I>(tokens: &mut Peekable<I>,
                                                    expected: &str)
                                                    -> ParseResult<Spanned>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match tokens.next_if(|item| !matches!(item, Ok((Token::EndOfInput, _)))) {
        Some(item) => Ok(item?),
        None => Err(end_of_input(tokens, expected)),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ParseError::Expected` naming both tokens if a different token is
/// found.
pub(in crate::interpreter::parser) fn expect<I>(tokens: &mut Peekable<I>,
                                                expected: &Token)
                                                -> ParseResult<usize>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let (token, line) = next_token(tokens, &expected.to_string())?;
    if &token == expected {
        return Ok(line);
    }

    Err(ParseError::Expected { expected: expected.to_string(),
                               found: token.to_string(),
                               line })
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<String>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match next_token(tokens, "an identifier")? {
        (Token::Identifier(name), _) => Ok(name),
        (token, line) => Err(ParseError::Expected { expected: "an identifier".to_string(),
                                                    found: token.to_string(),
                                                    line }),
    }
}
