/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, not fractional and
/// within the range where every integer is exactly representable as `f64`.
///
/// Restricting the range to `±(2^53 - 1)` guarantees that the returned integer
/// is the one the user would read off the real, not a neighbour produced by
/// rounding.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i64)`: The converted value if it is exact.
/// - `None`: If the value is non-finite, fractional or too large.
///
/// # Example
/// ```
/// use safecalc::util::num::{MAX_SAFE_I64_INT, f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
///
/// #[allow(clippy::cast_precision_loss)]
/// let too_big = (MAX_SAFE_I64_INT as f64) * 4.0;
/// assert_eq!(f64_to_i64_exact(too_big), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` to `u32` if and only if it is exactly representable.
///
/// # Parameters
/// - `value`: The integer to convert.
///
/// # Returns
/// - `Some(u32)`: The converted value.
/// - `None`: If the value is negative or exceeds `u32::MAX`.
///
/// # Example
/// ```
/// use safecalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}
