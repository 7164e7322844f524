/// The complexity scorer.
///
/// Assigns an integer difficulty score to an expression from its tree and
/// its raw text, and maps the score onto one of five ordered levels.
///
/// # Responsibilities
/// - Walks the tree, weighting multiplication, division and exponentiation.
/// - Adds surface points for length and parentheses.
/// - Falls back to a zero score when the text does not parse.
pub mod complexity;
/// The `Engine` value tying parsing, evaluation and scoring together under
/// one set of limits.
pub mod core;
/// The evaluator reduces expression trees to numbers.
///
/// # Responsibilities
/// - Applies the five whitelisted arithmetic operators.
/// - Reports division by zero.
/// - Rejects hand-built nodes the grammar can never produce.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces a stream of tokens paired with
/// their character position. It recognizes non-arithmetic syntax as well, so
/// that the parser can name what it rejects.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Parses numeric literals.
/// - Reports characters that match no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Implements arithmetic precedence and associativity.
/// - Rejects malformed and non-arithmetic input with positioned errors.
/// - Enforces input length and nesting limits.
pub mod parser;
