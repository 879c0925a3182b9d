use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::unexpected_token,
        },
        value::Number,
    },
};

/// Parses a unary expression.
///
/// Supports a single prefix sign:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Signs do not repeat: `--5` is rejected because the operand of a sign must
/// be a primary. A signed group such as `-(-5)` is the way to negate twice.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-")? primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `state`: Nesting tracker.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 state: &mut ParseState)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Plus, position)) => Some((UnaryOperator::Plus, *position)),
        Some((Token::Minus, position)) => Some((UnaryOperator::Minus, *position)),
        _ => None,
    };

    if let Some((op, position)) = op {
        tokens.next();
        let expr = parse_primary(tokens, state)?;
        return Ok(Expr::unary(op, expr, position));
    }

    parse_primary(tokens, state)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - parenthesized expressions
///
/// Any other token is rejected here. Names, calls, attribute access and the
/// like are reported as disallowed constructs rather than syntax errors.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `state`: Nesting tracker.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   state: &mut ParseState)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((tok, position)) = tokens.next() else {
        return Err(ParseError::syntax(state.end(), "unexpected end of input"));
    };

    match tok {
        Token::Number(value) => parse_literal(*value, *position),
        Token::LParen => parse_grouping(tokens, state, *position),
        _ => Err(unexpected_token(tok,
                                  *position,
                                  tokens.peek().map(|(next, _)| next),
                                  "; expected a number or `(`")),
    }
}

/// Builds a literal node.
///
/// The lexer turns integer literals too long for `i64` into reals; a literal
/// so long that even the real overflows is rejected here.
///
/// # Errors
/// `SyntaxError` if the literal is not finite.
fn parse_literal(value: Number, position: usize) -> ParseResult<Expr> {
    if !value.is_finite() {
        return Err(ParseError::syntax(position, "number literal is too large"));
    }
    Ok(Expr::literal(value, position))
}

/// Parses a parenthesized expression `( expression )`.
///
/// The opening parenthesis has already been consumed. The group enters one
/// nesting level for the duration of its contents.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `state`: Nesting tracker.
/// - `open`: Byte offset of the opening parenthesis.
///
/// # Errors
/// - `TooDeeplyNested` when the group exceeds the nesting limit.
/// - `SyntaxError` pointing at `open` when the input ends before `)`.
/// - `SyntaxError` or `DisallowedConstruct` when something else follows the
///   inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         state: &mut ParseState,
                         open: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    state.enter(open)?;
    let inner = parse_expression(tokens, state);
    state.leave();
    let inner = inner?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((tok, position)) => Err(unexpected_token(tok,
                                                      *position,
                                                      tokens.peek().map(|(next, _)| next),
                                                      "; expected `)`")),
        None => Err(ParseError::syntax(open, "unmatched `(`")),
    }
}
