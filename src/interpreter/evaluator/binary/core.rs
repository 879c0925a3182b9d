use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to the handler for its operator:
    /// `+ - *` go through `combine` with the matching checked integer
    /// operation, `/` to `eval_div`, `%` to `eval_mod` and `**` to `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Number>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Number},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                     Number::Integer(3),
    ///                                     Number::Integer(4),
    ///                                     1);
    /// assert_eq!(result.unwrap(), Number::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       position: usize)
                       -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(Self::combine(left, right, i64::checked_add, |a, b| a + b)),
            Sub => Ok(Self::combine(left, right, i64::checked_sub, |a, b| a - b)),
            Mul => Ok(Self::combine(left, right, i64::checked_mul, |a, b| a * b)),
            Div => Self::eval_div(left, right, position),
            Mod => Self::eval_mod(left, right, position),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
