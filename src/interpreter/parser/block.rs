use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement_body,
            utils::{end_of_input, expect, peek},
        },
        scanner::LexResult,
    },
};

/// Parses a block delimited by braces.
///
/// Every statement inside must be terminated by `;`. Empty statements made
/// of stray `;` are skipped.
///
/// Grammar: `block := "{" (statement ";" | ";")* "}"`
///
/// A block holding exactly one expression statement is returned as that
/// expression; otherwise the result is `Expr::Block`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Errors
/// `Expected` if the opening brace or a `;` is missing, and
/// `UnexpectedEndOfInput` if the input ends before the closing brace.
pub fn parse_block<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let line = expect(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match peek(tokens)? {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => {
                statements.push(parse_statement_body(tokens)?);
                expect(tokens, &Token::Semicolon)?;
            },
            None => {
                return Err(end_of_input(tokens, &Token::RBrace.to_string()));
            },
        }
    }

    if matches!(statements.as_slice(), [Statement::Expression(_)])
       && let Some(Statement::Expression(expr)) = statements.pop()
    {
        return Ok(expr);
    }

    Ok(Expr::Block { statements, line })
}
