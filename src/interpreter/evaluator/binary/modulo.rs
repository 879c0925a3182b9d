use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator {
    /// Evaluates the floored remainder `left % right`.
    ///
    /// The remainder takes the sign of the divisor, so that
    /// `left == right * floor(left / right) + left % right` holds:
    /// `-7 % 3` is `2` and `7 % -3` is `-2`. Two integers give an integer;
    /// any real operand gives a real, and a zero real remainder carries the
    /// sign of the divisor.
    ///
    /// # Errors
    /// `DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::eval_mod(Number::Integer(-7), Number::Integer(3), 0).unwrap(),
    ///            Number::Integer(2));
    /// assert_eq!(Evaluator::eval_mod(Number::Real(5.5), Number::Integer(2), 0).unwrap(),
    ///            Number::Real(1.5));
    /// ```
    pub fn eval_mod(left: Number, right: Number, position: usize) -> EvalResult<Number> {
        if right.is_zero() {
            return Err(EvalError::DivisionByZero { position });
        }

        Ok(match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(floored_rem_i64(a, b)),
            _ => Number::Real(floored_rem_f64(left.as_real(), right.as_real())),
        })
    }
}

/// Integer floored remainder; `b` must be non-zero.
const fn floored_rem_i64(a: i64, b: i64) -> i64 {
    // `i64::MIN % -1` overflows in hardware but is mathematically 0.
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}

/// Real floored remainder; `b` must be non-zero.
fn floored_rem_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r == 0.0 {
        0.0_f64.copysign(b)
    } else if (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}
