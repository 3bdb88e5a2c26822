use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an `если` expression.
    ///
    /// Only the chosen branch is evaluated. Without an `иначе` branch a false
    /// condition yields `0.0`.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     condition: &Expr,
                                                     then_branch: &Expr,
                                                     else_branch: Option<&Expr>,
                                                     env: &mut Environment)
                                                     -> EvalResult<Value> {
        if self.eval(condition, env)?.is_truthy() {
            self.eval(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch, env)
        } else {
            Ok(Value::Number(0.0))
        }
    }

    /// Evaluates a `нц_пока` loop.
    ///
    /// The condition is checked before every iteration. The result is the
    /// body's value from the last iteration, or `0.0` if the body never ran.
    pub(in crate::interpreter::evaluator) fn eval_while(&mut self,
                                                        condition: &Expr,
                                                        body: &Expr,
                                                        env: &mut Environment)
                                                        -> EvalResult<Value> {
        let mut result = Value::Number(0.0);
        let mut iterations = 0usize;

        while self.eval(condition, env)?.is_truthy() {
            result = self.eval(body, env)?;
            iterations += 1;
        }

        trace!(iterations, "loop finished");
        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// Blocks do not open a scope: declarations inside them land in `env`.
    /// An empty block yields `0.0`.
    pub(in crate::interpreter::evaluator) fn eval_block(&mut self,
                                                        statements: &[Statement],
                                                        env: &mut Environment)
                                                        -> EvalResult<Value> {
        let mut result = Value::Number(0.0);
        for statement in statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }
}
