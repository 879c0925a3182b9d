use crate::{
    ast::Expr,
    config::Limits,
    error::EvalError,
    interpreter::value::Number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks expression trees and computes their values.
///
/// The evaluator holds no state besides its depth limit, so one instance can
/// evaluate any number of trees, from any number of threads.
///
/// ## Usage
///
/// ```
/// use safecalc::{config::Limits, interpreter::{evaluator::core::Evaluator, value::Number}, parse};
///
/// let evaluator = Evaluator::new(&Limits::default());
/// let tree = parse("2 + 3 * 4").unwrap();
///
/// assert_eq!(evaluator.evaluate(&tree), Ok(Number::Integer(14)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    /// Maximum recursion depth. Signs, parenthesized operands and right
    /// operands each add a level; left-nested chains do not.
    pub max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl Evaluator {
    /// Creates an evaluator that enforces `limits.max_depth`.
    #[must_use]
    pub const fn new(limits: &Limits) -> Self {
        Self { max_depth: limits.max_depth }
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// Children are evaluated before they are combined, left operand first,
    /// and the first failure stops the walk.
    ///
    /// # Errors
    /// - `TooDeeplyNested` if operands nest deeper than `max_depth` (see
    ///   [`Evaluator::max_depth`]).
    /// - `DisallowedConstruct` for a literal that is not a finite number.
    /// - `DivisionByZero`, `DomainError` or `Overflow` from the operators.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Number> {
        self.eval(expr, 1)
    }

    /// Evaluates `expr`, which sits at `depth` in the tree.
    fn eval(&self, expr: &Expr, depth: usize) -> EvalResult<Number> {
        if depth > self.max_depth {
            return Err(EvalError::TooDeeplyNested { limit: self.max_depth });
        }

        match expr {
            Expr::Literal { value, position } => Self::eval_literal(*value, *position),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr, depth + 1)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { .. } => self.eval_chain(expr, depth),
        }
    }

    /// Evaluates a binary node together with every binary node down its left
    /// spine.
    ///
    /// `1 + 2 - 3 * 4` nests to the left, so a flat chain of `n` operators is
    /// a tree of height `n`. The spine is walked in a loop and only right
    /// operands recurse, which keeps `depth` tied to parentheses, signs and
    /// `**` chains rather than to the length of the input. Operands are still
    /// evaluated left to right.
    fn eval_chain(&self, expr: &Expr, depth: usize) -> EvalResult<Number> {
        let mut pending = Vec::new();
        let mut base = expr;
        while let Expr::BinaryOp { left,
                                   op,
                                   right,
                                   position, } = base
        {
            pending.push((*op, right.as_ref(), *position));
            base = left.as_ref();
        }

        let mut value = self.eval(base, depth + 1)?;
        for (op, right, position) in pending.into_iter().rev() {
            let right = self.eval(right, depth + 1)?;
            value = Self::eval_binary(op, value, right, position)?;
        }
        Ok(value)
    }

    /// Evaluates a literal.
    ///
    /// The parser never produces a non-finite literal, so one can only come
    /// from a hand-built tree; it is outside the arithmetic subset and is
    /// rejected.
    ///
    /// # Example
    /// ```
    /// use safecalc::{error::EvalError, interpreter::{evaluator::core::Evaluator, value::Number}};
    ///
    /// assert_eq!(Evaluator::eval_literal(Number::Real(1.5), 0), Ok(Number::Real(1.5)));
    /// assert!(matches!(Evaluator::eval_literal(Number::Real(f64::NAN), 3),
    ///                  Err(EvalError::DisallowedConstruct { position: 3, .. })));
    /// ```
    pub fn eval_literal(value: Number, position: usize) -> EvalResult<Number> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::DisallowedConstruct { kind: format!("non-finite literal `{value}`"),
                                                 position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, UnaryOperator};

    #[test]
    fn evaluating_twice_gives_the_same_result() {
        let tree = Expr::binary(Expr::literal(7, 0), BinaryOperator::Mod, Expr::literal(3, 2), 1);
        let evaluator = Evaluator::default();

        let first = evaluator.evaluate(&tree);
        let second = evaluator.evaluate(&tree);
        assert_eq!(first, Ok(Number::Integer(1)));
        assert_eq!(first, second);
    }

    #[test]
    fn depth_limit_stops_tall_trees() {
        let mut tree = Expr::literal(1, 0);
        for _ in 0..10 {
            tree = Expr::unary(UnaryOperator::Minus, tree, 0);
        }
        let evaluator = Evaluator { max_depth: 10 };

        assert_eq!(evaluator.evaluate(&tree), Err(EvalError::TooDeeplyNested { limit: 10 }));
        assert_eq!(Evaluator { max_depth: 11 }.evaluate(&tree), Ok(Number::Integer(1)));
    }

    #[test]
    fn left_chains_do_not_count_towards_depth() {
        let mut tree = Expr::literal(0, 0);
        for i in 1..=100_000 {
            tree = Expr::binary(tree, BinaryOperator::Add, Expr::literal(i, 0), 0);
        }
        let evaluator = Evaluator { max_depth: 2 };

        assert_eq!(evaluator.evaluate(&tree), Ok(Number::Integer(5_000_050_000)));
    }

    #[test]
    fn right_operands_count_towards_depth() {
        let mut tree = Expr::literal(1, 0);
        for _ in 0..5 {
            tree = Expr::binary(Expr::literal(1, 0), BinaryOperator::Mul, tree, 0);
        }

        assert_eq!(Evaluator { max_depth: 5 }.evaluate(&tree),
                   Err(EvalError::TooDeeplyNested { limit: 5 }));
        assert_eq!(Evaluator { max_depth: 6 }.evaluate(&tree), Ok(Number::Integer(1)));
    }

    #[test]
    fn hand_built_infinite_literal_is_disallowed() {
        let tree = Expr::binary(Expr::literal(1, 0),
                                BinaryOperator::Add,
                                Expr::literal(f64::INFINITY, 4),
                                2);
        assert_eq!(Evaluator::default().evaluate(&tree),
                   Err(EvalError::DisallowedConstruct { kind:     "non-finite literal `inf`".to_string(),
                                                        position: 4, }));
    }

    #[test]
    fn left_operand_fails_first() {
        let tree = Expr::binary(Expr::binary(Expr::literal(1, 0),
                                             BinaryOperator::Div,
                                             Expr::literal(0, 2),
                                             1),
                                BinaryOperator::Add,
                                Expr::literal(f64::NAN, 6),
                                4);
        assert_eq!(Evaluator::default().evaluate(&tree),
                   Err(EvalError::DivisionByZero { position: 1 }));
    }
}
