use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{console::Console, environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks statement trees and computes their values.
///
/// The evaluator owns nothing but its console handle. The environment is
/// passed into every call, so the only state a statement can change is the
/// environment it is given and the console output.
///
/// ## Example
/// ```
/// use kirlang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         console::BufferConsole, environment::Environment, evaluator::core::Evaluator,
///         value::Value,
///     },
/// };
///
/// let mut console = BufferConsole::new();
/// let mut env = Environment::new();
/// let mut evaluator = Evaluator::new(&mut console);
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 2.0,
///                                                            line:  1, }),
///                             op:    BinaryOperator::Mul,
///                             right: Box::new(Expr::Number { value: 21.0,
///                                                            line:  1, }),
///                             line:  1, };
///
/// assert_eq!(evaluator.eval(&expr, &mut env).unwrap(), Value::Number(42.0));
/// ```
pub struct Evaluator<'io> {
    pub(in crate::interpreter::evaluator) console: &'io mut dyn Console,
}

impl<'io> Evaluator<'io> {
    /// Creates an evaluator writing to and reading from `console`.
    pub fn new(console: &'io mut dyn Console) -> Self {
        Self { console }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; assignments and I/O statements
    /// change the environment or the console as a side effect.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The variables the expression reads and writes.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the tree.
    pub fn eval(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Str { value, line } => self.eval_str(value, *line),
            Expr::Variable { name, line } => env.scalar(name, *line),
            Expr::ArrayIndex { name, index, line } => {
                self.eval_array_index(name, index, *line, env)
            },
            Expr::Negate { expr, line } => self.eval_negate(expr, *line, env),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line, env),
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => self.eval_if(condition, then_branch, else_branch.as_deref(), env),
            Expr::WhileExpr { condition, body, .. } => self.eval_while(condition, body, env),
            Expr::Block { statements, .. } => self.eval_block(statements, env),
            Expr::Assignment { name, value, line } => {
                self.eval_assignment(name, value, *line, env)
            },
            Expr::IndexAssignment { name,
                                    index,
                                    value,
                                    line, } => {
                self.eval_index_assignment(name, index, value, *line, env)
            },
            Expr::Print { expr, line } => self.eval_print(expr, *line, env),
            Expr::Newline { line } => self.eval_newline(*line),
            Expr::Input { name, line } => self.eval_input(name, *line, env),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations create or replace a slot in `env` and yield the initial
    /// value (`0.0` for arrays); expression statements yield their value.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating the
    /// statement.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          env: &mut Environment)
                          -> EvalResult<Value> {
        match statement {
            Statement::ScalarDeclaration { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.declare_scalar(name, value);
                Ok(value)
            },
            Statement::ArrayDeclaration { name, size, line } => {
                env.declare_array(name, *size, *line)?;
                Ok(Value::Number(0.0))
            },
            Statement::Expression(expr) => self.eval(expr, env),
        }
    }
}
