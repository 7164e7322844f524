use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are zero-based character offsets into the original input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Expression is empty.")]
    EmptyInput,
    /// Found an unexpected or unknown token while parsing.
    #[error("Unexpected token at position {position}: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// The length of the input, in characters.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the '(' at position {position}.")]
    ExpectedClosingParen {
        /// Where the unmatched `(` is.
        position: usize,
    },
    /// Found a `)` without a matching `(`.
    #[error("Unmatched closing parenthesis ')' at position {position}.")]
    UnexpectedClosingParen {
        /// Where the stray `)` is.
        position: usize,
    },
    /// The input contains something other than arithmetic.
    #[error("{construct} not allowed at position {position}: {token}.")]
    DisallowedConstruct {
        /// What kind of construct was found (e.g. "Names").
        construct: &'static str,
        /// The offending source text.
        token:     String,
        /// Where the construct starts.
        position:  usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression at position {position}: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it starts.
        position: usize,
    },
    /// A literal value was too large to be represented as a finite number.
    #[error("Literal at position {position} is too large.")]
    LiteralTooLarge {
        /// Where the literal starts.
        position: usize,
    },
    /// The input is longer than the configured limit.
    #[error("Expression is {length} characters long; the limit is {max}.")]
    InputTooLong {
        /// The length of the input, in characters.
        length: usize,
        /// The configured limit.
        max:    usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Expression nests too deeply at position {position}; the limit is {max}.")]
    NestingTooDeep {
        /// The configured limit.
        max:      usize,
        /// Where the limit was crossed.
        position: usize,
    },
}
