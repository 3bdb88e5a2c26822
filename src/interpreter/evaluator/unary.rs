use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `-expr`.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` if the operand has no numeric value.
    pub(in crate::interpreter::evaluator) fn eval_negate(&mut self,
                                                         expr: &Expr,
                                                         line: usize,
                                                         env: &mut Environment)
                                                         -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        Ok(Value::Number(-value.as_number(line)?))
    }
}
