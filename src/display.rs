use crate::{interpreter::value::Number, util::num::f64_to_i64_exact};

/// Normalizes a result for display.
///
/// A real with no fractional part becomes an integer, so `4 / 2` shows as `2`
/// rather than `2.0`. Only reals within `±(2^53 - 1)` are converted; larger
/// reals are not exact integers in any useful sense and stay real, as do
/// fractional and non-finite values.
///
/// This is presentation policy. The evaluator never applies it; callers
/// choose to.
///
/// # Example
/// ```
/// use safecalc::{compute, display::normalize, interpreter::value::Number};
///
/// assert_eq!(normalize(compute("4 / 2").unwrap()), Number::Integer(2));
/// assert_eq!(normalize(compute("7 / 2").unwrap()), Number::Real(3.5));
/// assert_eq!(normalize(Number::Real(1e20)), Number::Real(1e20));
/// ```
#[must_use]
pub fn normalize(value: Number) -> Number {
    match value {
        Number::Real(r) => f64_to_i64_exact(r).map_or(value, Number::Integer),
        Number::Integer(_) => value,
    }
}
