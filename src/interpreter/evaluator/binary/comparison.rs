use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a comparison between two values.
    ///
    /// Numbers and booleans compare numerically (`true == 1`). Unit is only
    /// equal to unit and cannot be ordered.
    ///
    /// # Returns
    /// A `Value::Bool`.
    ///
    /// # Example
    /// ```
    /// use kirlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Equal,
    ///                                     &Value::Bool(true),
    ///                                     &Value::Number(1.0),
    ///                                     1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    #[allow(clippy::float_cmp)]
    pub(in crate::interpreter::evaluator) fn eval_comparison(op: BinaryOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            let equal = match (left, right) {
                (Value::Unit, Value::Unit) => true,
                (Value::Unit, _) | (_, Value::Unit) => false,
                _ => left.as_number(line)? == right.as_number(line)?,
            };
            return Ok(Value::Bool(equal == matches!(op, Equal)));
        }

        let l = left.as_number(line)?;
        let r = right.as_number(line)?;

        let result = match op {
            Less => l < r,
            LessEqual => l <= r,
            Greater => l > r,
            GreaterEqual => l >= r,
            _ => unreachable!(),
        };

        Ok(Value::Bool(result))
    }
}
