/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* / %` and the
/// right-associative `**`.
pub mod binary;
/// Core parsing entry points.
///
/// Contains the parse result type, the nesting tracker and the functions that
/// turn a whole source string or token slice into a tree.
pub mod core;
/// Unary and primary parsing.
///
/// Handles signs, numeric literals and parenthesized groups.
pub mod unary;
/// Shared parser helpers.
///
/// Turns unexpected tokens into precise errors, naming the construct when the
/// token is outside the arithmetic subset.
pub mod utils;
