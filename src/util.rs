/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever a real has to become an `i64` or `u32`, for
/// example when an integral real is shown as an integer or when an exponent
/// is applied with exact integer arithmetic.
///
/// All functions return an `Option`, which is `Some` if the conversion is
/// lossless and valid, or `None` if the value is out of range or not an
/// integer.
pub mod num;
