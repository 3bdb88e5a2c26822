use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression, parse_if, parse_while},
            utils::{expect, next_token, parse_identifier, peek, peek_is},
        },
        scanner::LexResult,
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions are the operands of binary operators:
/// - numeric, boolean and string literals
/// - variables, array elements and assignments to either
/// - parenthesized expressions
/// - negation (`-` followed by a primary)
/// - `если` and `нц_пока` expressions
/// - `вывод`, `конецстр` and `ввод`
///
/// The leading token alone selects the sub-parser.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_expr
///              | "(" expression ")"
///              | "-" primary
///              | if_expression
///              | while_expression
///              | "вывод" expression
///              | "конецстр"
///              | "ввод" identifier
/// ```
/// # Errors
/// `UnexpectedToken` if the token cannot start an expression.
pub(crate) fn parse_primary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let (token, line) = next_token(tokens, "an expression")?;

    match token {
        Token::Number(value) => Ok(Expr::Number { value, line }),
        Token::Bool(value) => Ok(Expr::Bool { value, line }),
        Token::Str(value) => Ok(Expr::Str { value, line }),
        Token::Identifier(name) => parse_identifier_expr(tokens, name, line),
        Token::LParen => parse_grouping(tokens),
        Token::Minus => {
            let expr = parse_primary(tokens)?;
            Ok(Expr::Negate { expr: Box::new(expr),
                              line })
        },
        Token::If => parse_if(tokens, line),
        Token::While => parse_while(tokens, line),
        Token::Print => {
            let expr = parse_expression(tokens)?;
            Ok(Expr::Print { expr: Box::new(expr),
                             line })
        },
        Token::Newline => Ok(Expr::Newline { line }),
        Token::Input => {
            let name = parse_identifier(tokens)?;
            Ok(Expr::Input { name, line })
        },
        other => Err(ParseError::UnexpectedToken { found: other.to_string(),
                                                   line }),
    }
}

/// Parses whatever follows an identifier.
///
/// The token after the name decides the form:
/// - `[` index `]` reads an array element, or writes it when `=` follows,
/// - `=` assigns to a scalar,
/// - anything else reads a scalar.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the identifier.
/// - `name`: The identifier.
/// - `line`: Line number of the identifier.
fn parse_identifier_expr<I>(tokens: &mut Peekable<I>,
                            name: String,
                            line: usize)
                            -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    match peek(tokens)? {
        Some((Token::LBracket, _)) => {
            tokens.next();
            let index = Box::new(parse_expression(tokens)?);
            expect(tokens, &Token::RBracket)?;

            if peek_is(tokens, &Token::Assign)? {
                tokens.next();
                let value = Box::new(parse_expression(tokens)?);
                return Ok(Expr::IndexAssignment { name,
                                                  index,
                                                  value,
                                                  line });
            }

            Ok(Expr::ArrayIndex { name, index, line })
        },
        Some((Token::Assign, _)) => {
            tokens.next();
            let value = Box::new(parse_expression(tokens)?);
            Ok(Expr::Assignment { name, value, line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}

/// Parses a parenthesized expression; the `(` is already consumed.
fn parse_grouping<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}
