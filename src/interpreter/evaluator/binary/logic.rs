use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator<'_> {
    /// Evaluates a logical operation between two evaluated operands.
    ///
    /// The operands are converted with [`Value::is_truthy`]; the result is
    /// always a boolean.
    pub(in crate::interpreter::evaluator) fn eval_logic(op: BinaryOperator,
                                                        left: &Value,
                                                        right: &Value)
                                                        -> Value {
        match op {
            BinaryOperator::And => Value::Bool(left.is_truthy() && right.is_truthy()),
            BinaryOperator::Or => Value::Bool(left.is_truthy() || right.is_truthy()),
            _ => unreachable!(),
        }
    }
}
