/// Binary operator evaluation.
///
/// Implements the five whitelisted arithmetic operations, including the
/// division-by-zero checks.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the recursive walk over the tree and the shared result type.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation.
pub mod unary;
