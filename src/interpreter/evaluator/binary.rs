/// Arithmetic operators: `+`, `-`, `*`, `/`.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;

/// Operand evaluation and routing to the operator families.
pub mod core;

/// Logical `&&` and `||`.
pub mod logic;
