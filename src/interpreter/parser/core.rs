use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            binary::parse_binary_rhs,
            block::parse_block,
            primary::parse_primary,
            utils::{expect, peek_is},
        },
        scanner::LexResult,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing: a primary expression
/// followed by any chain of binary operators, grouped by precedence
/// climbing starting from the lowest precedence.
///
/// Grammar: `expression := primary (binary_op primary)*`
///
/// # Parameters
/// - `tokens`: Token stream producing `(Token, line)` pairs on demand.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let left = parse_primary(tokens)?;
    parse_binary_rhs(tokens, 0, left)
}

/// Parses an `если` expression with an optional `иначе` branch.
///
/// Syntax:
/// ```text
///     если ( <condition> ) { <then> }
///     если ( <condition> ) { <then> } иначе { <else> }
/// ```
/// Both the parentheses and the braces are mandatory.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `если` keyword.
/// - `line`: Line number of the `если` token.
///
/// # Errors
/// - `Expected` if a parenthesis or brace is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let condition = parse_condition(tokens)?;
    let then_branch = parse_block(tokens)?;

    let else_branch = if peek_is(tokens, &Token::Else)? {
        tokens.next();
        Some(Box::new(parse_block(tokens)?))
    } else {
        None
    };

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch,
                      line })
}

/// Parses a `нц_пока` loop.
///
/// Syntax: `нц_пока ( <condition> ) { <body> }`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `нц_пока` keyword.
/// - `line`: Line number of the `нц_пока` token.
pub fn parse_while<I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Expr::WhileExpr { condition: Box::new(condition),
                         body: Box::new(body),
                         line })
}

/// Parses `( <expression> )`.
fn parse_condition<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(condition)
}
