use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, next_token, parse_identifier, peek, peek_is},
        },
        scanner::LexResult,
    },
    util::num::f64_to_index,
};

/// Parses the next top-level statement.
///
/// Stray `;` are skipped. The statement must then be followed by `;` or by
/// end of input; a conditional or loop, whose syntax already ends with `}`,
/// may omit the `;`. The terminating `;` is consumed without looking past
/// it, so no further source is read before the statement is evaluated.
///
/// # Returns
/// - `Ok(Some(statement))` for each statement,
/// - `Ok(None)` once the input is exhausted.
///
/// # Example
/// ```
/// use kirlang::{
///     ast::Statement,
///     interpreter::{parser::statement::parse_statement, scanner::Scanner, source::StrSource},
/// };
///
/// let mut tokens = Scanner::new(StrSource::new(";; цел x = 1; x")).peekable();
///
/// assert!(matches!(parse_statement(&mut tokens).unwrap(),
///                  Some(Statement::ScalarDeclaration { .. })));
/// assert!(matches!(parse_statement(&mut tokens).unwrap(),
///                  Some(Statement::Expression(_))));
/// assert_eq!(parse_statement(&mut tokens).unwrap(), None);
/// ```
pub fn parse_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = LexResult<Spanned>>
{
    while peek_is(tokens, &Token::Semicolon)? {
        tokens.next();
    }
    if peek(tokens)?.is_none() {
        return Ok(None);
    }

    let statement = parse_statement_body(tokens)?;

    match peek(tokens)? {
        Some((Token::Semicolon, _)) => {
            tokens.next();
        },
        None => {},
        Some(_) if statement.ends_with_block() => {},
        Some((token, line)) => {
            return Err(ParseError::Expected { expected: Token::Semicolon.to_string(),
                                              found: token.to_string(),
                                              line });
        },
    }

    Ok(Some(statement))
}

/// Parses one statement without its terminator: a declaration or an
/// expression.
pub(in crate::interpreter::parser) fn parse_statement_body<I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Statement>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match peek(tokens)? {
        Some((Token::IntDecl | Token::DoubleDecl, line)) => {
            tokens.next();
            parse_numeric_declaration(tokens, line)
        },
        Some((Token::BoolDecl, line)) => {
            tokens.next();
            parse_bool_declaration(tokens, line)
        },
        _ => Ok(Statement::Expression(parse_expression(tokens)?)),
    }
}

/// Parses the rest of a `цел` or `вещ` declaration.
///
/// Two forms are accepted:
/// - `цел <identifier> = <expression>` declares a scalar,
/// - `цел <identifier> [ <number> ]` declares a zero-filled array. The size
///   is a literal and fractional sizes are truncated.
///
/// # Errors
/// Returns a `ParseError` if the identifier, `=` or the bracketed size is
/// malformed.
fn parse_numeric_declaration<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let name = parse_identifier(tokens)?;

    if peek_is(tokens, &Token::LBracket)? {
        tokens.next();
        let size = parse_array_size(tokens)?;
        expect(tokens, &Token::RBracket)?;
        return Ok(Statement::ArrayDeclaration { name, size, line });
    }

    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::ScalarDeclaration { name, value, line })
}

/// Parses the rest of a `бул <identifier> = <expression>` declaration.
fn parse_bool_declaration<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::ScalarDeclaration { name, value, line })
}

/// Parses the numeric literal giving an array's size.
fn parse_array_size<I>(tokens: &mut Peekable<I>) -> ParseResult<usize>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match next_token(tokens, "an array size")? {
        (Token::Number(size), line) => {
            f64_to_index(size).ok_or(ParseError::InvalidArraySize { size, line })
        },
        (token, line) => Err(ParseError::Expected { expected: "an array size".to_string(),
                                                    found: token.to_string(),
                                                    line }),
    }
}
