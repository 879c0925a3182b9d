#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// The input is longer than the configured limit.
    #[error("Expression is {length} bytes long; the limit is {limit}.")]
    InputTooLong {
        /// The length of the input in bytes.
        length: usize,
        /// The configured length limit.
        limit:  usize,
    },
    /// The input does not follow the arithmetic grammar.
    #[error("Syntax error at position {position}: {reason}.")]
    SyntaxError {
        /// The byte offset where the error was detected.
        position: usize,
        /// What went wrong.
        reason:   String,
    },
    /// The input contains something other than arithmetic, such as a name,
    /// a call or an attribute access.
    #[error("Disallowed construct at position {position}: {kind}.")]
    DisallowedConstruct {
        /// Description of the rejected construct.
        kind:     String,
        /// The byte offset of the rejected token.
        position: usize,
    },
    /// Parentheses or exponent chains are nested deeper than allowed.
    #[error("Expression nested too deeply at position {position}: the limit is {limit}.")]
    TooDeeplyNested {
        /// The configured nesting limit.
        limit:    usize,
        /// The byte offset of the token that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression | Self::InputTooLong { .. } => None,
            Self::SyntaxError { position, .. }
            | Self::DisallowedConstruct { position, .. }
            | Self::TooDeeplyNested { position, .. } => Some(*position),
        }
    }

    pub(crate) fn syntax(position: usize, reason: impl Into<String>) -> Self {
        Self::SyntaxError { position,
                            reason: reason.into() }
    }

    pub(crate) fn disallowed(position: usize, kind: impl Into<String>) -> Self {
        Self::DisallowedConstruct { kind: kind.into(),
                                    position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_position() {
        let err = ParseError::syntax(3, "expected ')'");
        assert_eq!(err.to_string(), "Syntax error at position 3: expected ')'.");

        let err = ParseError::disallowed(0, "name `x`");
        assert_eq!(err.to_string(), "Disallowed construct at position 0: name `x`.");
    }

    #[test]
    fn empty_expression_has_no_position() {
        assert_eq!(ParseError::EmptyExpression.position(), None);
        assert_eq!(ParseError::TooDeeplyNested { limit: 100,
                                                 position: 7 }.position(),
                   Some(7));
    }
}
