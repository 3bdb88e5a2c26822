use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
    util::num::f64_to_index,
};

impl Evaluator<'_> {
    /// Reads `name[index]`.
    ///
    /// The array is looked up before the index is evaluated, so an unknown
    /// name is reported even when the index itself would fail.
    pub(in crate::interpreter::evaluator) fn eval_array_index(&mut self,
                                                              name: &str,
                                                              index: &Expr,
                                                              line: usize,
                                                              env: &mut Environment)
                                                              -> EvalResult<Value> {
        env.array(name, line)?;
        let index = self.eval(index, env)?;

        let values = env.array(name, line)?;
        let position = resolve_index(name, index, values.len(), line)?;
        Ok(Value::Number(values[position]))
    }

    /// Evaluates `name = value` and yields the assigned value.
    pub(in crate::interpreter::evaluator) fn eval_assignment(&mut self,
                                                             name: &str,
                                                             value: &Expr,
                                                             line: usize,
                                                             env: &mut Environment)
                                                             -> EvalResult<Value> {
        let value = self.eval(value, env)?;
        env.assign_scalar(name, value, line)?;
        Ok(value)
    }

    /// Evaluates `name[index] = value`.
    ///
    /// The right-hand side is evaluated first, then the array is looked up,
    /// then the index. Elements are numbers, so a boolean is stored as `1.0`
    /// or `0.0`; the result is the value as evaluated.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` is not declared.
    /// - `RuntimeError::TypeError` if `name` is a scalar or the value is
    ///   unit.
    /// - `RuntimeError::IndexOutOfBounds` if the index does not select an
    ///   element.
    pub(in crate::interpreter::evaluator) fn eval_index_assignment(&mut self,
                                                                   name: &str,
                                                                   index: &Expr,
                                                                   value: &Expr,
                                                                   line: usize,
                                                                   env: &mut Environment)
                                                                   -> EvalResult<Value> {
        let value = self.eval(value, env)?;
        let number = value.as_number(line)?;

        env.array(name, line)?;
        let index = self.eval(index, env)?;

        let values = env.array_mut(name, line)?;
        let position = resolve_index(name, index, values.len(), line)?;
        values[position] = number;
        Ok(value)
    }
}

/// Converts an evaluated index into an element position.
///
/// Fractional indices are truncated toward zero.
fn resolve_index(name: &str, index: Value, len: usize, line: usize) -> EvalResult<usize> {
    let raw = index.as_number(line)?;
    match f64_to_index(raw) {
        Some(position) if position < len => Ok(position),
        _ => Err(RuntimeError::IndexOutOfBounds { name: name.to_string(),
                                                  index: raw,
                                                  len,
                                                  line }),
    }
}
