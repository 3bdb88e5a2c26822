use std::iter::Peekable;

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        console::Console, environment::Environment, evaluator::core::Evaluator,
        parser::statement::parse_statement, scanner::Scanner, source::CharacterSource,
        value::Value,
    },
};

/// A program being executed one top-level statement at a time.
///
/// Each [`step`](Self::step) parses exactly one statement and evaluates it
/// before any later source text is read. Output written by a statement is
/// therefore visible before a syntax error further down is discovered.
///
/// ## Example
/// ```
/// use kirlang::interpreter::{
///     console::BufferConsole, program::Program, source::StrSource, value::Value,
/// };
///
/// let mut console = BufferConsole::new();
/// let mut program = Program::new(StrSource::new("цел x = 4; x * 2;"), &mut console);
///
/// assert_eq!(program.step().unwrap(), Some(Value::Number(4.0)));
/// assert_eq!(program.step().unwrap(), Some(Value::Number(8.0)));
/// assert_eq!(program.step().unwrap(), None);
/// ```
pub struct Program<'io, S: CharacterSource> {
    tokens:      Peekable<Scanner<S>>,
    environment: Environment,
    evaluator:   Evaluator<'io>,
}

impl<'io, S: CharacterSource> Program<'io, S> {
    /// Prepares `source` for execution against `console`, with an empty
    /// environment.
    pub fn new(source: S, console: &'io mut dyn Console) -> Self {
        Self { tokens:      Scanner::new(source).peekable(),
               environment: Environment::new(),
               evaluator:   Evaluator::new(console), }
    }

    /// Parses and evaluates the next statement.
    ///
    /// # Returns
    /// - `Ok(Some(value))` with the statement's value,
    /// - `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns the lexical, syntax or runtime error raised by the statement.
    /// Statements before it have already taken effect.
    pub fn step(&mut self) -> Result<Option<Value>, Error> {
        let Some(statement) = parse_statement(&mut self.tokens)? else {
            debug!("end of program");
            return Ok(None);
        };

        debug!(line = statement.line_number(), "evaluating statement");
        let value = self.evaluator
                        .eval_statement(&statement, &mut self.environment)?;
        Ok(Some(value))
    }

    /// Executes every remaining statement, stopping at the first error.
    pub fn run(&mut self) -> Result<(), Error> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// The variables declared so far.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }
}
