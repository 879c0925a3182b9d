use crate::{error::ParseError, interpreter::lexer::Token};

/// Describes the construct a token introduces, if that construct lies outside
/// the arithmetic subset.
///
/// The lookahead token distinguishes a bare name from a call.
///
/// # Parameters
/// - `token`: The offending token.
/// - `next`: The token that follows it, if any.
///
/// # Returns
/// `Some(description)` for disallowed constructs, `None` for tokens that are
/// part of arithmetic but merely misplaced.
///
/// # Example
/// ```
/// use safecalc::interpreter::{lexer::Token, parser::utils::disallowed_kind};
///
/// let name = Token::Identifier("abs".to_string());
/// assert_eq!(disallowed_kind(&name, Some(&Token::LParen)).as_deref(),
///            Some("call to `abs`"));
/// assert_eq!(disallowed_kind(&name, None).as_deref(), Some("name `abs`"));
/// assert_eq!(disallowed_kind(&Token::Plus, None), None);
/// ```
#[must_use]
pub fn disallowed_kind(token: &Token, next: Option<&Token>) -> Option<String> {
    let kind = match token {
        Token::Identifier(name) if next == Some(&Token::LParen) => format!("call to `{name}`"),
        Token::Identifier(name) => format!("name `{name}`"),
        Token::Dot => "attribute access".to_string(),
        Token::Comma => "tuple".to_string(),
        Token::LBracket | Token::RBracket => "subscript".to_string(),
        Token::Equals => "assignment".to_string(),
        Token::Quote => "string literal".to_string(),
        _ => return None,
    };
    Some(kind)
}

/// Builds the error for a token the grammar cannot accept at this point.
///
/// Tokens outside the arithmetic subset become
/// `ParseError::DisallowedConstruct`; malformed literals and misplaced
/// arithmetic tokens become `ParseError::SyntaxError`.
///
/// # Parameters
/// - `token`: The offending token.
/// - `position`: Its byte offset.
/// - `next`: The token that follows it, if any.
/// - `context`: Suffix appended to the syntax error reason, such as
///   `"; expected a number"`.
#[must_use]
pub fn unexpected_token(token: &Token,
                        position: usize,
                        next: Option<&Token>,
                        context: &str)
                        -> ParseError {
    if let Some(kind) = disallowed_kind(token, next) {
        return ParseError::disallowed(position, kind);
    }

    match token {
        Token::MalformedNumber(text) => {
            ParseError::syntax(position, format!("malformed number literal `{text}`"))
        },
        _ => ParseError::syntax(position, format!("unexpected {token}{context}")),
    }
}
