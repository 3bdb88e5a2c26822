/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the logical operators. Both operands
/// are always evaluated, left first.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, the dispatch over expression and statement
/// variants, and the evaluator's result type.
pub mod core;

/// Evaluation of conditionals, loops and blocks.
pub mod control;

/// Variable and array access.
///
/// Declarations, reads and assignments against the environment, including
/// index resolution and bounds checks.
pub mod variable;

/// Console statements.
///
/// String literals, `вывод`, `конецстр` and `ввод`.
pub mod io;
