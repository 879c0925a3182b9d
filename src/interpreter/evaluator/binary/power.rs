use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
    util::num::i64_to_u32_checked,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and stays an integer. When it overflows, or when the
    /// exponent is negative or either operand is real, both operands are
    /// promoted to reals and evaluated with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `DomainError` for a negative base raised to a fractional power, which
    ///   has no real result.
    /// - `Overflow` when finite operands produce an infinite result.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(10), 1).unwrap();
    /// assert_eq!(result, Number::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Number::Real(0.5));
    /// ```
    pub fn eval_pow(base: Number, exponent: Number, position: usize) -> EvalResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && let Some(e) = i64_to_u32_checked(e)
           && let Some(value) = b.checked_pow(e)
        {
            return Ok(Number::Integer(value));
        }

        real_pow(base.as_real(), exponent.as_real(), position)
    }
}

/// Raises `base` to `exponent` in floating point, rejecting results that are
/// undefined or out of range.
#[allow(clippy::float_cmp)]
fn real_pow(base: f64, exponent: f64, position: usize) -> EvalResult<Number> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero { position });
    }

    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::DomainError { details: format!("negative base {base} raised to \
                                                              fractional power {exponent}"),
                                            position });
    }

    let value = base.powf(exponent);
    if value.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(EvalError::Overflow { position });
    }

    Ok(Number::Real(value))
}
