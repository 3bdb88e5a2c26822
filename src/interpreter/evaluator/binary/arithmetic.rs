use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*` or `/` on two values.
    ///
    /// Booleans take part as `1.0` and `0.0`. Dividing by exactly zero is an
    /// error rather than an infinity.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for `x / 0`.
    /// - `RuntimeError::TypeError` if an operand has no numeric value.
    pub(in crate::interpreter::evaluator) fn eval_arithmetic(op: BinaryOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        let l = left.as_number(line)?;
        let r = right.as_number(line)?;

        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                l / r
            },
            _ => unreachable!(),
        };

        Ok(Value::Number(result))
    }
}
