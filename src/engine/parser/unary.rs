use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    engine::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParseState, parse_expression},
            utils::unexpected_token_error,
        },
    },
    error::ParseError,
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds looser than `**`, so `-2 ** 2` is
/// `-(2 ** 2)`. Unary `+` is not part of the grammar.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `state`: Current nesting state; each `-` descends one level.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, state: ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let state = state.descend(*position)?;
        tokens.next();
        let expr = parse_unary(tokens, state)?;
        Ok(Expr::negate(expr))
    } else {
        parse_power(tokens, state)
    }
}

/// Parses exponentiation.
///
/// The exponent is parsed as a unary expression, which makes `**`
/// right-associative (`a ** b ** c` is `a ** (b ** c)`) and allows a negated
/// exponent (`2 ** -1`).
///
/// Grammar: `power := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `state`: Current nesting state; the exponent descends one level.
///
/// # Returns
/// An exponentiation node or the primary expression on its own.
fn parse_power<'a, I>(tokens: &mut Peekable<I>, state: ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, state)?;
    if let Some((Token::StarStar, position)) = tokens.peek() {
        let state = state.descend(*position)?;
        tokens.next();
        let exponent = parse_unary(tokens, state)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numeric literals and parenthesized expressions.
/// Any other leading token is rejected here; an identifier directly followed
/// by `(` is reported as a function call rather than a name.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `state`: Current nesting state.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, state: ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, position) = *tokens.peek().ok_or_else(|| state.end_of_input())?;

    match token {
        Token::Number(_) => parse_number(tokens),
        Token::LParen => parse_grouping(tokens, state),
        Token::Identifier(name) if is_call(tokens) => {
            Err(ParseError::DisallowedConstruct { construct: "Function calls",
                                                  token: name.clone(),
                                                  position: *position })
        },
        tok => Err(unexpected_token_error(tok, *position)),
    }
}

/// Returns `true` when the identifier under the cursor is followed by `(`.
fn is_call<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.peek(), Some((Token::LParen, _)))
}

/// Parses a numeric literal.
///
/// Converts the literal's source text to an `f64`.
///
/// # Errors
/// `ParseError::LiteralTooLarge` if the literal does not fit in a finite
/// `f64` (for example `1e999`).
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(text), position)) => {
            // Overlong exponents parse to infinity.
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
                _ => Err(ParseError::LiteralTooLarge { position: *position }),
            }
        },
        Some((tok, position)) => Err(unexpected_token_error(tok, *position)),
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. A disallowed token in place
/// of the `)` (as in `(1, 2)`) is named; otherwise the error is
/// `ParseError::ExpectedClosingParen` pointing at the unmatched `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `state`: Current nesting state; the group descends one level.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, state: ParseState) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = match tokens.next() {
        Some((Token::LParen, position)) => *position,
        Some((tok, position)) => return Err(unexpected_token_error(tok, *position)),
        None => return Err(state.end_of_input()),
    };
    let state = state.descend(position)?;
    let expr = parse_expression(tokens, state)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, found)) if tok.disallowed_construct().is_some() => {
            Err(unexpected_token_error(tok, *found))
        },
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
