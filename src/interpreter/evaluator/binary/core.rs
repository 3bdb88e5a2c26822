use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates both operands, left first, then applies `op`.
    ///
    /// There is no short-circuiting: `false && (5 / 0)` still divides by
    /// zero.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            line: usize,
                                                            env: &mut Environment)
                                                            -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Applies a binary operator to two already evaluated values.
    ///
    /// Arithmetic operators produce numbers; comparisons and logical
    /// operators produce booleans.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use kirlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Sub,
    ///                                     &Value::Number(3.0),
    ///                                     &Value::Number(4.0),
    ///                                     1);
    ///
    /// assert_eq!(result.unwrap(), Value::Number(-1.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
