use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A named storage location.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A single value, created by `цел x = ...`, `вещ x = ...` or
    /// `бул x = ...`.
    Scalar(Value),
    /// A fixed-size array of numbers, created by `цел a[n]`.
    Array(Vec<f64>),
}

/// The program's variables.
///
/// There is a single global namespace: no scopes, no shadowing. A slot lives
/// from its declaration until the program ends; declaring a name again
/// replaces its slot.
#[derive(Debug, Default)]
pub struct Environment {
    slots: HashMap<String, Slot>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Binds `name` to a scalar holding `value`.
    pub fn declare_scalar(&mut self, name: &str, value: Value) {
        debug!(variable = name, %value, "declare scalar");
        self.slots.insert(name.to_string(), Slot::Scalar(value));
    }

    /// Binds `name` to a zero-filled array of `len` elements.
    ///
    /// # Errors
    /// Returns `RuntimeError::ArrayTooLarge` if the elements cannot be
    /// allocated. The existing binding of `name`, if any, is kept.
    pub fn declare_array(&mut self, name: &str, len: usize, line: usize) -> EvalResult<()> {
        let mut values = Vec::new();
        values.try_reserve_exact(len)
              .map_err(|_| RuntimeError::ArrayTooLarge { name: name.to_string(),
                                                         len,
                                                         line })?;
        values.resize(len, 0.0);

        debug!(variable = name, len, "declare array");
        self.slots.insert(name.to_string(), Slot::Array(values));
        Ok(())
    }

    /// Reads the scalar bound to `name`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` was never declared.
    /// - `RuntimeError::TypeError` if `name` is an array.
    ///
    /// # Example
    /// ```
    /// use kirlang::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.declare_scalar("x", Value::Number(5.0));
    ///
    /// assert_eq!(env.scalar("x", 1).unwrap(), Value::Number(5.0));
    /// assert!(env.scalar("y", 1).is_err());
    /// ```
    pub fn scalar(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.slots.get(name) {
            Some(Slot::Scalar(value)) => Ok(*value),
            Some(Slot::Array(_)) => Err(array_without_index(name, line)),
            None => Err(unknown_variable(name, line)),
        }
    }

    /// Replaces the value of the scalar bound to `name`.
    ///
    /// # Errors
    /// Same as [`Environment::scalar`]; the variable is never created.
    pub fn assign_scalar(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.slots.get_mut(name) {
            Some(Slot::Scalar(slot)) => {
                *slot = value;
                Ok(())
            },
            Some(Slot::Array(_)) => Err(array_without_index(name, line)),
            None => Err(unknown_variable(name, line)),
        }
    }

    /// Reads the elements of the array bound to `name`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` was never declared.
    /// - `RuntimeError::TypeError` if `name` is a scalar.
    pub fn array(&self, name: &str, line: usize) -> EvalResult<&[f64]> {
        match self.slots.get(name) {
            Some(Slot::Array(values)) => Ok(values),
            Some(Slot::Scalar(_)) => Err(scalar_with_index(name, line)),
            None => Err(unknown_variable(name, line)),
        }
    }

    /// Mutable access to the elements of the array bound to `name`.
    ///
    /// # Errors
    /// Same as [`Environment::array`].
    pub fn array_mut(&mut self, name: &str, line: usize) -> EvalResult<&mut [f64]> {
        match self.slots.get_mut(name) {
            Some(Slot::Array(values)) => Ok(values),
            Some(Slot::Scalar(_)) => Err(scalar_with_index(name, line)),
            None => Err(unknown_variable(name, line)),
        }
    }
}

fn unknown_variable(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UnknownVariable { name: name.to_string(),
                                    line }
}

fn array_without_index(name: &str, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Array '{name}' used without index"),
                              line }
}

fn scalar_with_index(name: &str, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{name}' is not an array"),
                              line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_start_zeroed() {
        let mut env = Environment::new();
        env.declare_array("a", 3, 1).unwrap();

        assert_eq!(env.array("a", 1).unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn assignment_never_creates_variables() {
        let mut env = Environment::new();

        assert!(matches!(env.assign_scalar("y", Value::Number(1.0), 4),
                         Err(RuntimeError::UnknownVariable { line: 4, .. })));
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn arrays_and_scalars_are_not_interchangeable() {
        let mut env = Environment::new();
        env.declare_array("a", 1, 1).unwrap();
        env.declare_scalar("x", Value::Bool(true));

        assert!(matches!(env.scalar("a", 1), Err(RuntimeError::TypeError { .. })));
        assert!(matches!(env.assign_scalar("a", Value::Number(1.0), 1),
                         Err(RuntimeError::TypeError { .. })));
        assert!(matches!(env.array("x", 1), Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn redeclaration_replaces_the_slot() {
        let mut env = Environment::new();
        env.declare_array("x", 2, 1).unwrap();
        env.declare_scalar("x", Value::Number(7.0));

        assert_eq!(env.get("x"), Some(&Slot::Scalar(Value::Number(7.0))));
    }

    #[test]
    fn arrays_that_cannot_be_allocated_are_errors() {
        let mut env = Environment::new();
        env.declare_scalar("a", Value::Number(1.0));

        assert!(matches!(env.declare_array("a", usize::MAX / 16, 3),
                         Err(RuntimeError::ArrayTooLarge { line: 3, .. })));
        assert_eq!(env.get("a"), Some(&Slot::Scalar(Value::Number(1.0))));
    }

    #[test]
    fn array_elements_can_be_updated_in_place() {
        let mut env = Environment::new();
        env.declare_array("a", 2, 1).unwrap();
        env.array_mut("a", 1).unwrap()[1] = 9.0;

        assert_eq!(env.array("a", 1).unwrap(), &[0.0, 9.0]);
    }
}
