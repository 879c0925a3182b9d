use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `state`: Nesting tracker.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, state)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = parse_multiplicative(tokens, state)?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`, where
/// `factor := power`.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `state`: Nesting tracker.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   state: &mut ParseState)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_power(tokens, state)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let position = *position;
            tokens.next();
            let right = parse_power(tokens, state)?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. Each step to the right enters a nesting level, so long
/// chains are bounded by the same limit as parentheses.
///
/// The rule is: `power := unary ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `state`: Nesting tracker.
///
/// # Returns
/// An exponentiation expression tree.
///
/// # Errors
/// `TooDeeplyNested` when the chain exceeds the nesting limit, plus any
/// error from the operands.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, state: &mut ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, state)?;

    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        let position = *position;
        tokens.next();

        state.enter(position)?;
        let exponent = parse_power(tokens, state);
        state.leave();

        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent?, position));
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the six
/// arithmetic operators and `None` for all other tokens.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Limits, interpreter::parser::core::parse_source};

    fn shape(source: &str) -> String {
        parse_source(source, &Limits::default()).unwrap().to_string()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(shape("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(shape("2*3+4"), "((2 * 3) + 4)");
    }

    #[test]
    fn same_level_operators_associate_left() {
        assert_eq!(shape("8-4-2"), "((8 - 4) - 2)");
        assert_eq!(shape("8/4%3*2"), "(((8 / 4) % 3) * 2)");
    }

    #[test]
    fn power_associates_right() {
        assert_eq!(shape("2**3**2"), "(2 ** (3 ** 2))");
        assert_eq!(shape("2*3**2"), "(2 * (3 ** 2))");
    }

    #[test]
    fn sign_binds_tighter_than_power() {
        assert_eq!(shape("-2**2"), "(-2 ** 2)");
        assert_eq!(shape("2**-1"), "(2 ** -1)");
    }

    #[test]
    fn operator_positions_are_recorded() {
        let expr = parse_source("1 +  2", &Limits::default()).unwrap();
        assert_eq!(expr.position(), 2);
    }
}
