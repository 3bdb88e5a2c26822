/// Output and numeric input for running programs.
///
/// Declares the `Console` trait used by `вывод`, `конецстр` and `ввод`,
/// with a standard-stream implementation and an in-memory one for tests and
/// embedding.
pub mod console;
/// Variable storage.
///
/// A single flat namespace mapping names to scalar or array slots. There
/// are no nested scopes; blocks declare into the same environment.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, arrays, conditionals and loops.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module defines the tokens of the language.
///
/// Each token corresponds to a meaningful language element such as a
/// number, identifier, operator, delimiter or keyword.
///
/// # Responsibilities
/// - Recognizes keywords, identifiers, literals and operators.
/// - Tracks source lines across the text being tokenized.
/// - Classifies invalid input for lexical error reporting.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the scanner and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Applies operator precedence and associativity.
pub mod parser;
/// Statement-at-a-time execution of a whole program.
pub mod program;
/// The scanner turns a character source into a lazy token stream.
pub mod scanner;
/// Character sources the scanner reads program text from.
pub mod source;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, booleans or unit. This module provides the numeric
/// and truthiness conversions the evaluator relies on, and the text form
/// `вывод` prints.
pub mod value;
