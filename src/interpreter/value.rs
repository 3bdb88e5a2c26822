use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every scalar the language computes with is one of these. Declaration
/// keywords do not influence which variant a variable holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals, comparisons and logical operators.
    Bool(bool),
    /// The value of statements evaluated only for their effect, such as
    /// string literals.
    Unit,
}

impl Value {
    /// Converts the value to an `f64` for arithmetic and ordering.
    ///
    /// Booleans count as `1.0` and `0.0`; unit has no numeric value.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for `Value::Unit`.
    ///
    /// # Example
    /// ```
    /// use kirlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_number(1).unwrap(), 1.0);
    /// assert!(Value::Unit.as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Unit => Err(RuntimeError::TypeError { details: "Expected a number, found no value".to_string(),
                                                        line }),
        }
    }

    /// Whether the value counts as true in a condition or logical operator.
    ///
    /// Booleans are used directly, numbers are true when non-zero and unit
    /// is false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Unit => false,
        }
    }
}

impl fmt::Display for Value {
    /// Numbers print in their shortest round-trip form and always show a
    /// fractional part or exponent (`6.0`, `0.25`, `1e+16`, `1.5e-05`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unit => Ok(()),
        }
    }
}

/// Writes `n` with a signed exponent of at least two digits, and `nan` /
/// `inf` for the non-finite values.
///
/// The digits and the switch to exponent form (below `1e-4`, from `1e16`
/// up) are those of `f64`'s `Debug` output.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }

    let text = format!("{n:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return f.write_str(&text);
    };

    match exponent.strip_prefix('-') {
        Some(digits) => write!(f, "{mantissa}e-{digits:0>2}"),
        None => write!(f, "{mantissa}e+{exponent:0>2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_like_floats() {
        assert_eq!(Value::Number(6.0).to_string(), "6.0");
        assert_eq!(Value::Number(0.1).to_string(), "0.1");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Number(10.0 / 3.0).to_string(), "3.3333333333333335");
    }

    #[test]
    fn exponents_are_signed_and_padded() {
        assert_eq!(Value::Number(1e16).to_string(), "1e+16");
        assert_eq!(Value::Number(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Number(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Value::Number(1.5e300).to_string(), "1.5e+300");
        assert_eq!(Value::Number(123_456.0).to_string(), "123456.0");
    }

    #[test]
    fn non_finite_numbers_display() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Value::Number(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn booleans_and_unit_display() {
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Unit.to_string(), "");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Unit.is_truthy());
    }
}
