#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// Division or modulo by zero, or zero raised to a negative power.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// The byte offset of the offending operator.
        position: usize,
    },
    /// The operation has no real-valued result.
    #[error("Math domain error at position {position}: {details}.")]
    DomainError {
        /// Details about why the operation is undefined.
        details:  String,
        /// The byte offset of the offending operator.
        position: usize,
    },
    /// A node outside the arithmetic subset was found in the tree.
    #[error("Disallowed construct at position {position}: {kind}.")]
    DisallowedConstruct {
        /// Description of the rejected node.
        kind:     String,
        /// The byte offset of the rejected node.
        position: usize,
    },
    /// The tree is deeper than the evaluator is willing to recurse.
    #[error("Expression nested too deeply: the limit is {limit}.")]
    TooDeeplyNested {
        /// The configured depth limit.
        limit: usize,
    },
    /// A power produced a result too large to represent.
    #[error("Numerical result out of range at position {position}.")]
    Overflow {
        /// The byte offset of the offending operator.
        position: usize,
    },
}

impl EvalError {
    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::TooDeeplyNested { .. } => None,
            Self::DivisionByZero { position }
            | Self::DomainError { position, .. }
            | Self::DisallowedConstruct { position, .. }
            | Self::Overflow { position } => Some(*position),
        }
    }
}
