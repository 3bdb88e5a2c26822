/// Expression entry point and the braced control-flow forms.
///
/// Defines the parser's result type, `parse_expression`, and the `если` and
/// `нц_пока` sub-parsers.
pub mod core;

/// Primary expressions.
///
/// Literals, variables, array accesses, assignments, parenthesized
/// expressions, negation and the I/O statements.
pub mod primary;

/// Binary operator parsing.
///
/// Precedence climbing over the operator table, left-associative for every
/// operator.
pub mod binary;

/// Block parsing.
///
/// Parses `{ statement; ... }` bodies of conditionals and loops.
pub mod block;

/// Helpers shared by the sub-parsers.
///
/// Lookahead, token expectations and identifier extraction.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations and the top-level statement boundary.
pub mod statement;
