/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the AST depth-first, combines child values with
/// the arithmetic operators and reports failures such as division by zero or
/// undefined powers. It is the allow-list half of the crate: a closed set of
/// node kinds, each with an explicit rule, and a rejection for anything else.
///
/// # Responsibilities
/// - Evaluates literals, signs and the six binary operators.
/// - Promotes integers to reals exactly where arithmetic requires it.
/// - Bounds its own recursion depth.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens paired
/// with their byte offsets. It is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into numbers, operators and
///   parentheses.
/// - Recognizes names, dots, quotes and similar so that the parser can reject
///   them by name.
/// - Reports characters no token starts with.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST using standard arithmetic precedence. Only the arithmetic grammar
/// exists, so nothing outside it can ever reach the evaluator.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with their byte offsets.
/// - Bounds nesting depth.
pub mod parser;
/// The value module defines the numeric result type.
///
/// Declares `Number`, the integer-or-real value produced by evaluation, with
/// its conversions and display rules.
pub mod value;
