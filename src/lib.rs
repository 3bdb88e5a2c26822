//! # kirlang
//!
//! kirlang is a tree-walking interpreter for a small imperative scripting
//! language with Cyrillic keywords. Programs declare numeric and boolean
//! variables and fixed-size arrays, branch with `если`/`иначе`, loop with
//! `нц_пока`, and talk to the console with `вывод`, `конецстр` and `ввод`.
//!
//! Execution is statement at a time: each top-level statement is scanned,
//! parsed and evaluated before the next one is read.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    error::Error,
    interpreter::{
        console::Console,
        program::Program,
        source::{CharacterSource, ReaderSource, StrSource},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Defines binary operators and their precedence.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. Every error carries the source line it was raised on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Wraps every phase in one crate-level `Error` for callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation, value
/// representations and console I/O to provide a complete runtime for source
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser, evaluator, and value
///   types.
/// - Defines the character sources and consoles a program runs against.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs every statement read from `source` against `console`.
///
/// Statements take effect in order; the first error stops the run, leaving
/// the effects of earlier statements (including console output) in place.
///
/// # Errors
/// Returns the lexical, syntax or runtime error that stopped the program.
///
/// # Examples
/// ```
/// use kirlang::{
///     interpreter::{console::BufferConsole, source::StrSource},
///     run,
/// };
///
/// let mut console = BufferConsole::with_input(["5"]);
/// let source = StrSource::new("цел x = 0; ввод x; вывод x * x;");
///
/// run(source, &mut console).unwrap();
/// assert_eq!(console.output(), "25.0");
/// ```
pub fn run<S: CharacterSource>(source: S, console: &mut dyn Console) -> Result<(), Error> {
    Program::new(source, console).run()
}

/// Runs a program given as a string.
///
/// # Errors
/// Returns the lexical, syntax or runtime error that stopped the program.
///
/// # Examples
/// ```
/// use kirlang::{interpreter::console::BufferConsole, run_source};
///
/// let mut console = BufferConsole::new();
///
/// // Output printed before a failing statement is kept.
/// let result = run_source("вывод 1; вывод y;", &mut console);
/// assert!(result.is_err());
/// assert_eq!(console.output(), "1.0");
/// ```
pub fn run_source(source: &str, console: &mut dyn Console) -> Result<(), Error> {
    run(StrSource::new(source), console)
}

/// Runs the program stored in the file at `path`.
///
/// # Errors
/// Returns `Error::Source` if the file cannot be opened, and otherwise the
/// error that stopped the program.
pub fn run_file(path: &Path, console: &mut dyn Console) -> Result<(), Error> {
    let file = File::open(path)?;
    run(ReaderSource::new(BufReader::new(file)), console)
}
