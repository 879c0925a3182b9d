use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Evaluator, value::Number},
};

impl Evaluator {
    /// Evaluates a sign applied to a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Minus`: numeric negation. Negating `i64::MIN` has no `i64` result
    ///   and yields a real instead.
    ///
    /// Signs cannot fail, so no `Result` is returned.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Number},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Minus, Number::Integer(5)),
    ///            Number::Integer(-5));
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, Number::Real(2.5)),
    ///            Number::Real(2.5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Number) -> Number {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => match value {
                Number::Integer(n) => n.checked_neg()
                                       .map_or_else(|| Number::Real(-value.as_real()),
                                                    Number::Integer),
                Number::Real(r) => Number::Real(-r),
            },
        }
    }
}
