use std::io;

use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Writes a string literal's text and yields unit.
    pub(in crate::interpreter::evaluator) fn eval_str(&mut self,
                                                      text: &str,
                                                      line: usize)
                                                      -> EvalResult<Value> {
        self.console
            .write(text)
            .map_err(|source| console_error(source, line))?;
        Ok(Value::Unit)
    }

    /// Evaluates `вывод expr`: writes the value with no line break and yields
    /// it.
    pub(in crate::interpreter::evaluator) fn eval_print(&mut self,
                                                        expr: &Expr,
                                                        line: usize,
                                                        env: &mut Environment)
                                                        -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        self.console
            .write(&value.to_string())
            .map_err(|source| console_error(source, line))?;
        Ok(value)
    }

    pub(in crate::interpreter::evaluator) fn eval_newline(&mut self,
                                                          line: usize)
                                                          -> EvalResult<Value> {
        self.console
            .write_line()
            .map_err(|source| console_error(source, line))?;
        Ok(Value::Number(0.0))
    }

    /// Evaluates `ввод name`: reads one console line, parses it as a number
    /// and assigns it.
    ///
    /// The target is checked before anything is read, so a bad name does not
    /// consume input.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` or `RuntimeError::TypeError` for a
    ///   missing or array target.
    /// - `RuntimeError::EndOfInput` when the console has no more lines.
    /// - `RuntimeError::InvalidNumber` when the line is not a number.
    pub(in crate::interpreter::evaluator) fn eval_input(&mut self,
                                                        name: &str,
                                                        line: usize,
                                                        env: &mut Environment)
                                                        -> EvalResult<Value> {
        env.scalar(name, line)?;

        let text = self.console
                       .read_line()
                       .map_err(|source| console_error(source, line))?
                       .ok_or(RuntimeError::EndOfInput { line })?;
        debug!(variable = name, input = %text, "read console input");

        let Ok(number) = text.trim().parse::<f64>() else {
            return Err(RuntimeError::InvalidNumber { text, line });
        };

        let value = Value::Number(number);
        env.assign_scalar(name, value, line)?;
        Ok(value)
    }
}

fn console_error(source: io::Error, line: usize) -> RuntimeError {
    RuntimeError::Console { source, line }
}
