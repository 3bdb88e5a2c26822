/// Numeric conversion helpers.
///
/// The language only has floating-point numbers, but array sizes and indices
/// must become `usize`. The helpers here truncate toward zero and refuse
/// values that do not name a position, instead of letting an `as` cast
/// saturate silently.
pub mod num;
