use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator {
    /// Combines two operands with an operation that has both an exact integer
    /// form and a real form.
    ///
    /// Two integers use `exact`; if it overflows, the operation is repeated on
    /// reals. Any real operand promotes both sides to reals.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `exact`: Checked integer operation, `None` on overflow.
    /// - `real`: Floating-point operation.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// let sum = Evaluator::combine(Number::Integer(2), Number::Real(0.5), i64::checked_add, |a, b| a + b);
    /// assert_eq!(sum, Number::Real(2.5));
    ///
    /// let big = Evaluator::combine(Number::Integer(i64::MAX), Number::Integer(2), i64::checked_mul, |a, b| a * b);
    /// assert!(matches!(big, Number::Real(_)));
    /// ```
    #[must_use]
    pub fn combine(left: Number,
                   right: Number,
                   exact: impl Fn(i64, i64) -> Option<i64>,
                   real: impl Fn(f64, f64) -> f64)
                   -> Number {
        match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => {
                exact(a, b).map_or_else(|| Number::Real(real(left.as_real(), right.as_real())),
                                        Number::Integer)
            },
            _ => Number::Real(real(left.as_real(), right.as_real())),
        }
    }

    /// Evaluates true division.
    ///
    /// The quotient is always a real, even for two integers that divide
    /// evenly: `4 / 2` is `2.0`.
    ///
    /// # Errors
    /// `DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::eval_div(Number::Integer(7), Number::Integer(2), 0).unwrap(),
    ///            Number::Real(3.5));
    /// assert!(Evaluator::eval_div(Number::Integer(7), Number::Real(0.0), 0).is_err());
    /// ```
    pub fn eval_div(left: Number, right: Number, position: usize) -> EvalResult<Number> {
        if right.is_zero() {
            return Err(EvalError::DivisionByZero { position });
        }
        Ok(Number::Real(left.as_real() / right.as_real()))
    }
}
