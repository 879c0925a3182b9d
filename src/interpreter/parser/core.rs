use std::iter::Peekable;

use crate::{
    ast::Expr,
    config::Limits,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, utils::unexpected_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tracks how deeply the parser has recursed.
///
/// Parentheses and the right operand of `**` are the only places where the
/// grammar recurses without consuming a fixed amount of input, so they are the
/// only places that enter and leave a nesting level.
#[derive(Debug)]
pub struct ParseState {
    depth:       usize,
    max_nesting: usize,
    end:         usize,
}

impl ParseState {
    /// Creates a state for a source of `end` bytes.
    #[must_use]
    pub const fn new(limits: &Limits, end: usize) -> Self {
        Self { depth: 0,
               max_nesting: limits.max_nesting,
               end }
    }

    /// Enters one nesting level.
    ///
    /// # Errors
    /// Returns `ParseError::TooDeeplyNested` if the level would exceed the
    /// limit. The depth is left unchanged in that case.
    pub const fn enter(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= self.max_nesting {
            return Err(ParseError::TooDeeplyNested { limit: self.max_nesting,
                                                     position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one nesting level.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Byte offset one past the last character of the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

/// Parses a full source string.
///
/// This is the entry point used by [`crate::parse`]. It checks the length
/// limit, rejects blank input, tokenizes and then parses the tokens.
///
/// # Errors
/// - `InputTooLong` if `source` exceeds `limits.max_length`.
/// - `EmptyExpression` if `source` is empty or whitespace.
/// - Any lexing or parsing error.
pub fn parse_source(source: &str, limits: &Limits) -> ParseResult<Expr> {
    if source.len() > limits.max_length {
        return Err(ParseError::InputTooLong { length: source.len(),
                                              limit:  limits.max_length, });
    }
    if source.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = tokenize(source)?;
    parse_tokens(&tokens, limits, source.len())
}

/// Parses a complete token slice into a single expression.
///
/// Every token must be consumed; anything left over after a complete
/// expression is an error.
///
/// # Parameters
/// - `tokens`: `(Token, position)` pairs as produced by the lexer.
/// - `limits`: The nesting limit to enforce.
/// - `end`: Length of the source, used to position end-of-input errors.
///
/// # Errors
/// Returns the first violation found.
pub fn parse_tokens(tokens: &[(Token, usize)], limits: &Limits, end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let mut state = ParseState::new(limits, end);

    let expr = parse_expression(&mut iter, &mut state)?;

    if let Some((tok, position)) = iter.next() {
        return Err(match tok {
                       Token::RParen => ParseError::syntax(*position, "unmatched `)`"),
                       _ => unexpected_token(tok,
                                             *position,
                                             iter.peek().map(|(next, _)| next),
                                             " after a complete expression"),
                   });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `state`: Nesting tracker.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               state: &mut ParseState)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseResult<Expr> {
        parse_source(source, &Limits::default())
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse(" \t\n"), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn long_input_is_rejected_before_lexing() {
        let limits = Limits { max_length: 4,
                              ..Limits::default() };
        assert_eq!(parse_source("1+2+3", &limits),
                   Err(ParseError::InputTooLong { length: 5,
                                                  limit:  4, }));
    }

    #[test]
    fn trailing_tokens_are_errors() {
        assert!(matches!(parse("1 2"), Err(ParseError::SyntaxError { position: 2, .. })));
        assert_eq!(parse("(1))"), Err(ParseError::syntax(3, "unmatched `)`")));
    }

    #[test]
    fn nesting_is_counted_and_released() {
        let limits = Limits { max_nesting: 2,
                              ..Limits::default() };
        assert!(parse_source("((1)) + ((2))", &limits).is_ok());
        assert_eq!(parse_source("(((1)))", &limits),
                   Err(ParseError::TooDeeplyNested { limit:    2,
                                                     position: 2, }));
    }
}
