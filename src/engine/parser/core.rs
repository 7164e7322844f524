use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    config::Limits,
    engine::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, utils::trailing_token_error},
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Nesting bookkeeping threaded through the recursive descent.
///
/// Every construct that makes the parser recurse into a fresh expression
/// (a parenthesized group, a negation, a power exponent) descends one level,
/// and so does every operator folded into a left-associative chain. The
/// depth therefore bounds both the parser's recursion and the height of the
/// resulting tree, which the evaluator and scorer walk recursively. Crossing
/// `max_depth` aborts the parse instead of growing the stack.
#[derive(Debug, Clone, Copy)]
pub struct ParseState {
    depth:     usize,
    max_depth: usize,
    input_len: usize,
}

impl ParseState {
    /// Creates the state for the top level of an input `input_len`
    /// characters long.
    #[must_use]
    pub const fn new(max_depth: usize, input_len: usize) -> Self {
        Self { depth: 0,
               max_depth,
               input_len }
    }

    /// Returns the state one nesting level deeper.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` when the limit would be exceeded.
    pub const fn descend(self, position: usize) -> ParseResult<Self> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { max: self.max_depth,
                                                    position });
        }
        Ok(Self { depth: self.depth + 1,
                  ..self })
    }

    /// The error for running out of tokens, positioned at the end of input.
    #[must_use]
    pub const fn end_of_input(self) -> ParseError {
        ParseError::UnexpectedEndOfInput { position: self.input_len }
    }
}

/// Parses an expression with the default [`Limits`].
///
/// # Errors
/// Returns a `ParseError` for anything that is not exactly one arithmetic
/// expression.
///
/// # Examples
/// ```
/// use roastulator::{ast::Expr, engine::parser::core::parse};
///
/// assert_eq!(parse("42").unwrap(), Expr::Number(42.0));
/// assert!(parse("x + 1").is_err());
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with_limits(source, &Limits::default())
}

/// Parses an expression, enforcing `limits`.
///
/// The length check runs before lexing so oversized input is never
/// tokenized.
///
/// # Errors
/// Returns a `ParseError` for empty, malformed, disallowed, oversized or
/// overly nested input.
///
/// # Examples
/// ```
/// use roastulator::{config::Limits, engine::parser::core::parse_with_limits, error::ParseError};
///
/// let limits = Limits::default().with_max_depth(2);
/// assert!(parse_with_limits("((1))", &limits).is_ok());
/// assert!(matches!(parse_with_limits("(((1)))", &limits),
///                  Err(ParseError::NestingTooDeep { max: 2, .. })));
/// ```
pub fn parse_with_limits(source: &str, limits: &Limits) -> ParseResult<Expr> {
    let length = source.chars().count();
    if length > limits.max_input_len {
        return Err(ParseError::InputTooLong { length,
                                              max: limits.max_input_len });
    }
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let state = ParseState::new(limits.max_depth, length);

    let expr = parse_expression(&mut iter, state)?;

    if let Some((token, position)) = iter.next() {
        return Err(trailing_token_error(token, *position));
    }

    debug!("Parsed '{source}' into {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point of the recursive descent. It begins at the
/// lowest-precedence level, addition and subtraction.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `state`: Current nesting state.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, state: ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, state)
}
