//! # safecalc
//!
//! safecalc is a restricted arithmetic expression evaluator written in Rust.
//! It parses and evaluates expressions made of numbers, parentheses, the signs
//! `+`/`-` and the operators `+ - * / % **`, and rejects everything else:
//! names, calls, attribute access, strings and statements never get past the
//! parser.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    config::Limits,
    error::{Error, EvalError, ParseError},
    interpreter::{evaluator::core::Evaluator, parser::core::parse_source, value::Number},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an arithmetic expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node kinds: literals, signs, binary operators.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Resource limits for parsing and evaluation.
///
/// Holds the `Limits` struct and its defaults: maximum nesting, maximum tree
/// depth and maximum input length.
pub mod config;
/// Caller-side presentation helpers.
///
/// Normalization of integral reals lives here rather than in the evaluator
/// because it is a display decision.
pub mod display;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. Every error carries enough detail for a
/// caller to explain the failure, including the byte offset when one applies.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Provides a combined error for the one-call `compute` entry point.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and the numeric
/// value type.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the building blocks behind [`parse`], [`evaluate`] and
///   [`compute`].
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32` and `f64` without silent data loss.
pub mod util;

/// Parses `text` into an expression tree with the default limits.
///
/// # Errors
/// Returns a `ParseError` for empty input, malformed syntax, constructs
/// outside arithmetic, or excessive nesting.
///
/// # Examples
/// ```
/// use safecalc::{error::ParseError, parse};
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
/// assert!(matches!(parse("(1 + 2"), Err(ParseError::SyntaxError { .. })));
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    parse_with(text, &Limits::default())
}

/// Parses `text` into an expression tree with the given limits.
///
/// # Errors
/// See [`parse`]; additionally fails when a limit is exceeded.
pub fn parse_with(text: &str, limits: &Limits) -> Result<Expr, ParseError> {
    parse_source(text, limits)
}

/// Evaluates an expression tree with the default limits.
///
/// # Errors
/// Returns an `EvalError` for division by zero, undefined powers, overflowing
/// powers, or nodes outside the arithmetic subset.
///
/// # Examples
/// ```
/// use safecalc::{evaluate, interpreter::value::Number, parse};
///
/// let tree = parse("2 ** 3 ** 2").unwrap();
/// assert_eq!(evaluate(&tree), Ok(Number::Integer(512)));
/// ```
pub fn evaluate(expr: &Expr) -> Result<Number, EvalError> {
    Evaluator::default().evaluate(expr)
}

/// Parses and evaluates `text` with the default limits.
///
/// This is the recommended single entry point. Parsing failures short-circuit
/// evaluation.
///
/// # Errors
/// Returns the first parse or evaluation error.
///
/// # Examples
/// ```
/// use safecalc::{compute, error::{Error, EvalError}, interpreter::value::Number};
///
/// assert_eq!(compute("-(3 + 4)"), Ok(Number::Integer(-7)));
/// assert_eq!(compute("7 / 2"), Ok(Number::Real(3.5)));
/// assert!(matches!(compute("5 % 0"), Err(Error::Eval(EvalError::DivisionByZero { .. }))));
/// ```
pub fn compute(text: &str) -> Result<Number, Error> {
    compute_with(text, &Limits::default())
}

/// Parses and evaluates `text` with the given limits.
///
/// # Errors
/// Returns the first parse or evaluation error.
#[tracing::instrument(level = "debug", skip(limits))]
pub fn compute_with(text: &str, limits: &Limits) -> Result<Number, Error> {
    let expr = parse_with(text, limits)?;
    tracing::debug!(tree = %expr, depth = expr.depth(), "parsed expression");

    let value = Evaluator::new(limits).evaluate(&expr)?;
    tracing::debug!(%value, "evaluated expression");

    Ok(value)
}
