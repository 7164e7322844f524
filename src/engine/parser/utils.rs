use crate::{engine::lexer::Token, error::ParseError};

/// Builds the error for a token found where an operand or operator was
/// expected.
///
/// Tokens that introduce a non-arithmetic construct are reported as
/// `ParseError::DisallowedConstruct`, everything else as
/// `ParseError::UnexpectedToken`.
///
/// # Example
/// ```
/// use roastulator::{engine::{lexer::Token, parser::utils::unexpected_token_error},
///                   error::ParseError};
///
/// assert!(matches!(unexpected_token_error(&Token::Star, 3),
///                  ParseError::UnexpectedToken { position: 3, .. }));
/// assert!(matches!(unexpected_token_error(&Token::Comma, 1),
///                  ParseError::DisallowedConstruct { construct: "Sequences", .. }));
/// ```
#[must_use]
pub fn unexpected_token_error(token: &Token, position: usize) -> ParseError {
    token.disallowed_construct()
         .map_or_else(|| ParseError::UnexpectedToken { token: token.to_string(),
                                                       position },
                      |construct| ParseError::DisallowedConstruct { construct,
                                                                    token: token.to_string(),
                                                                    position })
}

/// Builds the error for a token left over after a complete expression.
///
/// A stray `)` means the parentheses are unbalanced; a disallowed token
/// (e.g. the `;` in `1; 2`) is named; anything else, such as the `(` in the
/// implicit multiplication `2(3)`, is reported as trailing input.
#[must_use]
pub fn trailing_token_error(token: &Token, position: usize) -> ParseError {
    match token {
        Token::RParen => ParseError::UnexpectedClosingParen { position },
        _ if token.disallowed_construct().is_some() => unexpected_token_error(token, position),
        _ => ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                    position },
    }
}
