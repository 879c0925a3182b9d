/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include empty input, syntax mistakes, constructs outside
/// the arithmetic subset and inputs nested deeper than the configured limit.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree. Evaluation errors include division by zero, undefined powers and
/// numeric overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of [`crate::compute`].
///
/// Parsing and evaluation fail fast, so a single computation reports exactly
/// one of the two phases.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the byte offset the error points at, if it has one.
    ///
    /// # Example
    /// ```
    /// use safecalc::compute;
    ///
    /// let err = compute("1 + 2 / 0").unwrap_err();
    /// assert_eq!(err.position(), Some(6));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}
