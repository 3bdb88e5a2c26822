/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Truncates `value` toward zero and converts it to a `usize` position.
///
/// Fractions are dropped the way an integer cast drops them (`2.9` becomes
/// `2`, `-0.5` becomes `0`). Values that are not finite, that are negative
/// after truncation, or that exceed the exactly representable integer range
/// yield `None`.
///
/// ## Example
/// ```
/// use kirlang::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.9), Some(2));
/// assert_eq!(f64_to_index(-0.5), Some(0));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated < 0.0 || truncated > MAX_SAFE_U64_INT as f64 {
        return None;
    }

    usize::try_from(truncated as u64).ok()
}
