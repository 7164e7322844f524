use std::fmt;

use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    config::Limits,
    engine::{complexity::level::ComplexityLevel, parser::core::parse_with_limits},
};

/// Points for every binary operation.
pub const BINARY_OP_POINTS: u32 = 1;
/// Extra points for a multiplication or division.
pub const MUL_DIV_POINTS: u32 = 1;
/// Extra points for an exponentiation.
pub const POW_POINTS: u32 = 3;
/// One point per this many characters of input.
pub const CHARS_PER_POINT: usize = 5;
/// Points for every opening parenthesis.
pub const PAREN_POINTS: usize = 2;

/// A complexity score together with its level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Complexity {
    /// The integer score.
    pub score: u32,
    /// The level the score maps to.
    pub level: ComplexityLevel,
}

impl Complexity {
    /// Pairs a score with its level.
    ///
    /// # Example
    /// ```
    /// use roastulator::engine::complexity::{level::ComplexityLevel, score::Complexity};
    ///
    /// assert_eq!(Complexity::from_score(9).level, ComplexityLevel::Moderate);
    /// ```
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        Self { score,
               level: ComplexityLevel::from_score(score) }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score {})", self.level, self.score)
    }
}

/// Scores a parsed expression.
///
/// The score is the sum of:
/// - the structural score of `expr` (see [`tree_score`]);
/// - one point per five characters of `text`, rounded down;
/// - two points per `(` in `text`.
///
/// `text` must be the original, untrimmed input the tree was parsed from.
///
/// # Example
/// ```
/// use roastulator::engine::{complexity::score::score, parser::core::parse};
///
/// let text = "(2 + 3) * 4";
/// // + and * (3), 11 chars (2), one paren (2)
/// assert_eq!(score(text, &parse(text).unwrap()), 7);
/// ```
#[must_use]
pub fn score(text: &str, expr: &Expr) -> u32 {
    let structural = tree_score(expr);
    let surface = text_score(text);
    debug!("Scored '{text}': structural {structural}, surface {surface}");
    structural.saturating_add(surface)
}

/// Scores the structure of a tree.
///
/// Every binary operation is worth one point. Multiplication and division
/// add one more, exponentiation adds three more, so `*` and `/` cost two and
/// `**` costs four. Negation and literals are free.
///
/// # Example
/// ```
/// use roastulator::engine::{complexity::score::tree_score, parser::core::parse};
///
/// assert_eq!(tree_score(&parse("2 + 2").unwrap()), 1);
/// assert_eq!(tree_score(&parse("2 * 2").unwrap()), 2);
/// assert_eq!(tree_score(&parse("2 ** 2").unwrap()), 4);
/// assert_eq!(tree_score(&parse("-2").unwrap()), 0);
/// ```
#[must_use]
pub fn tree_score(expr: &Expr) -> u32 {
    match expr {
        Expr::Number(_) => 0,
        Expr::UnaryOp { expr, .. } => tree_score(expr),
        Expr::BinaryOp { left, op, right } => {
            let own = BINARY_OP_POINTS + operator_points(*op);
            own.saturating_add(tree_score(left))
               .saturating_add(tree_score(right))
        },
    }
}

const fn operator_points(op: BinaryOperator) -> u32 {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => 0,
        BinaryOperator::Mul | BinaryOperator::Div => MUL_DIV_POINTS,
        BinaryOperator::Pow => POW_POINTS,
    }
}

/// Scores surface features of the raw text: its length in characters and
/// its opening parentheses.
///
/// # Example
/// ```
/// use roastulator::engine::complexity::score::text_score;
///
/// assert_eq!(text_score("1234"), 0);
/// assert_eq!(text_score("12345"), 1);
/// assert_eq!(text_score("((1))"), 5);
/// ```
#[must_use]
pub fn text_score(text: &str) -> u32 {
    let length = text.chars().count() / CHARS_PER_POINT;
    let parens = text.matches('(').count().saturating_mul(PAREN_POINTS);
    u32::try_from(length.saturating_add(parens)).unwrap_or(u32::MAX)
}

/// Parses and scores `text`, never failing.
///
/// Input that does not parse scores `0` and is therefore `VerySimple`.
///
/// # Example
/// ```
/// use roastulator::engine::complexity::{level::ComplexityLevel, score::score_expression};
///
/// let complexity = score_expression("2+");
/// assert_eq!(complexity.score, 0);
/// assert_eq!(complexity.level, ComplexityLevel::VerySimple);
/// ```
#[must_use]
pub fn score_expression(text: &str) -> Complexity {
    score_expression_with_limits(text, &Limits::default())
}

/// Like [`score_expression`], with explicit parsing limits.
#[must_use]
pub fn score_expression_with_limits(text: &str, limits: &Limits) -> Complexity {
    let score = match parse_with_limits(text, limits) {
        Ok(expr) => score(text, &expr),
        Err(e) => {
            debug!("Scoring '{text}' as 0: {e}");
            0
        },
    };
    Complexity::from_score(score)
}
