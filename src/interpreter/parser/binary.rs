use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, primary::parse_primary, utils::peek},
        scanner::LexResult,
    },
};

/// Precedence reported for tokens that are not binary operators. Lower than
/// any operator, so such a token always ends the expression.
const NOT_AN_OPERATOR: i32 = -1;

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that cannot continue an expression.
///
/// # Example
/// ```
/// use kirlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Precedence of the next token, without consuming it.
fn peek_precedence<I>(tokens: &mut Peekable<I>) -> ParseResult<i32>
    where I: Iterator<Item = LexResult<Spanned>>
{
    Ok(match peek(tokens)? {
        Some((token, _)) => {
            token_to_binary_operator(token).map_or(NOT_AN_OPERATOR, BinaryOperator::precedence)
        },
        None => NOT_AN_OPERATOR,
    })
}

/// Parses the operator chain that follows an already parsed left operand.
///
/// Precedence climbing: operators binding at least as tightly as
/// `min_precedence` are folded into `left` one at a time. When the operator
/// after a right operand binds tighter than the current one, that operand
/// is first extended recursively with `current + 1` as the new minimum.
/// Chains of equal precedence therefore group to the left: `20 - 5 - 5` is
/// `(20 - 5) - 5`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `left`.
/// - `min_precedence`: Weakest operator this call may consume.
/// - `left`: The operand parsed so far.
///
/// # Returns
/// The expression tree for the whole chain.
pub fn parse_binary_rhs<I>(tokens: &mut Peekable<I>,
                           min_precedence: i32,
                           mut left: Expr)
                           -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<Spanned>>
{
    loop {
        let Some((token, line)) = peek(tokens)? else {
            return Ok(left);
        };
        let Some(op) = token_to_binary_operator(token) else {
            return Ok(left);
        };
        if op.precedence() < min_precedence {
            return Ok(left);
        }
        tokens.next();

        let mut right = parse_primary(tokens)?;
        if op.precedence() < peek_precedence(tokens)? {
            right = parse_binary_rhs(tokens, op.precedence() + 1, right)?;
        }

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
}
