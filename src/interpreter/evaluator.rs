/// Binary operator evaluation logic.
///
/// Handles the six arithmetic operators, integer/real promotion, the zero
/// checks for division and modulo, and the domain checks for powers.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the identity and negation signs.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator itself, its depth limit and the dispatch over
/// expression variants.
pub mod core;
