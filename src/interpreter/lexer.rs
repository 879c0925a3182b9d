use logos::Logos;

use crate::{error::ParseError, interpreter::value::Number};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Besides the arithmetic vocabulary, the lexer also recognizes a handful of
/// tokens that only exist so the parser can reject them by name: identifiers,
/// attribute dots, commas, brackets, assignments, quotes and malformed number
/// literals.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]+", parse_real)]
    #[regex(r"[0-9]+", parse_integer)]
    Number(Number),
    /// Number-like text that is not a valid literal, such as `1.2.3` or `1e5`.
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*", |lex| lex.slice().to_string())]
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    MalformedNumber(String),
    /// Identifier tokens, such as `x` or `__import__`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `'` or `"`
    #[regex(r#"['"]"#)]
    Quote,
    /// Whitespace.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::MalformedNumber(s) | Self::Identifier(s) => write!(f, "`{s}`"),
            Self::DoubleStar => write!(f, "`**`"),
            Self::Plus => write!(f, "`+`"),
            Self::Minus => write!(f, "`-`"),
            Self::Star => write!(f, "`*`"),
            Self::Slash => write!(f, "`/`"),
            Self::Percent => write!(f, "`%`"),
            Self::LParen => write!(f, "`(`"),
            Self::RParen => write!(f, "`)`"),
            Self::Dot => write!(f, "`.`"),
            Self::Comma => write!(f, "`,`"),
            Self::LBracket => write!(f, "`[`"),
            Self::RBracket => write!(f, "`]`"),
            Self::Equals => write!(f, "`=`"),
            Self::Quote => write!(f, "quote"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// Positions refer to `source` exactly as given, so leading whitespace shifts
/// every position.
///
/// # Errors
/// Returns `ParseError::SyntaxError` at the first character no token starts
/// with.
///
/// # Example
/// ```
/// use safecalc::interpreter::{lexer::{Token, tokenize}, value::Number};
///
/// let tokens = tokenize(" 2**3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(Number::Integer(2)), 1),
///                 (Token::DoubleStar, 2),
///                 (Token::Number(Number::Integer(3)), 4)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::syntax(position, format!("unexpected character `{slice}`")));
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(Number::Real)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<Number> {
    lex.slice().parse().ok().map(Number::Real)
}

/// Parses an integer literal from the current token slice.
///
/// Literals that do not fit in an `i64` become reals.
///
/// # Returns
/// - `Some(Number)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<Number> {
    let slice = lex.slice();
    slice.parse()
         .map(Number::Integer)
         .or_else(|_| slice.parse().map(Number::Real))
         .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(tok, _)| tok)
                        .collect()
    }

    #[test]
    fn double_star_wins_over_star() {
        assert_eq!(kinds("2**3*4"),
                   vec![Token::Number(Number::Integer(2)),
                        Token::DoubleStar,
                        Token::Number(Number::Integer(3)),
                        Token::Star,
                        Token::Number(Number::Integer(4))]);
    }

    #[test]
    fn float_forms() {
        assert_eq!(kinds("3.25 .5 2."),
                   vec![Token::Number(Number::Real(3.25)),
                        Token::Number(Number::Real(0.5)),
                        Token::Number(Number::Real(2.0))]);
    }

    #[test]
    fn huge_integers_become_reals() {
        assert_eq!(kinds("99999999999999999999"),
                   vec![Token::Number(Number::Real(1e20))]);
    }

    #[test]
    fn malformed_numbers_are_single_tokens() {
        assert_eq!(kinds("1.2.3"), vec![Token::MalformedNumber("1.2.3".to_string())]);
        assert_eq!(kinds("1e5"), vec![Token::MalformedNumber("1e5".to_string())]);
        assert_eq!(kinds("2x"), vec![Token::MalformedNumber("2x".to_string())]);
    }

    #[test]
    fn rejected_vocabulary_is_recognized() {
        assert_eq!(kinds("os.system('x')"),
                   vec![Token::Identifier("os".to_string()),
                        Token::Dot,
                        Token::Identifier("system".to_string()),
                        Token::LParen,
                        Token::Quote,
                        Token::Identifier("x".to_string()),
                        Token::Quote,
                        Token::RParen]);
    }

    #[test]
    fn unknown_character_reports_its_position() {
        let err = tokenize("1 + $").unwrap_err();
        assert_eq!(err,
                   ParseError::SyntaxError { position: 4,
                                             reason:   "unexpected character `$`".to_string(), });
    }
}
