/// Binary operator parsing.
///
/// Parses the left-associative additive and multiplicative levels.
pub mod binary;
/// Parser entry points, shared result type and nesting bookkeeping.
pub mod core;
/// Unary, power and primary expression parsing.
///
/// Handles negation, right-associative exponentiation, literals and
/// parenthesized groups.
pub mod unary;
/// Error construction shared by the parsing levels.
pub mod utils;
