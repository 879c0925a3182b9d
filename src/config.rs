/// Default maximum nesting of parentheses and `**` chains.
pub const DEFAULT_MAX_NESTING: usize = 100;
/// Default maximum recursion depth of the evaluator.
pub const DEFAULT_MAX_DEPTH: usize = 2_000;
/// Default maximum input length in bytes.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Resource limits applied while parsing and evaluating.
///
/// Every limit exists to keep recursion bounded: nesting bounds the parser's
/// call depth, depth bounds the evaluator's, and length bounds the size of
/// any tree the parser can build.
///
/// # Example
/// ```
/// use safecalc::{compute_with, config::Limits, error::{Error, ParseError}};
///
/// let limits = Limits { max_nesting: 2,
///                       ..Limits::default() };
///
/// assert!(compute_with("((1))", &limits).is_ok());
/// assert!(matches!(compute_with("(((1)))", &limits),
///                  Err(Error::Parse(ParseError::TooDeeplyNested { limit: 2, .. }))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of parentheses and right-recursive `**` chains.
    pub max_nesting: usize,
    /// Maximum recursion depth of the evaluator. Left-nested chains such as
    /// `1 + 2 + 3` are walked in a loop and do not count.
    pub max_depth:   usize,
    /// Maximum input length in bytes.
    pub max_length:  usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_nesting: DEFAULT_MAX_NESTING,
               max_depth:   DEFAULT_MAX_DEPTH,
               max_length:  DEFAULT_MAX_LENGTH, }
    }
}
