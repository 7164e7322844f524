//! # roastulator
//!
//! roastulator is a restricted arithmetic expression engine written in Rust.
//! It parses and evaluates a single arithmetic expression (numbers, `+ - * /
//! **`, negation and parentheses), refuses everything else, and scores how
//! complicated the expression is.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    engine::core::Engine,
    error::EngineError,
    roast::{Report, Roaster},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator types. The tree is
/// closed over exactly the shapes the grammar allows, is built by the parser
/// and is walked by the evaluator and the complexity scorer.
///
/// # Responsibilities
/// - Defines the expression tree and the operator whitelist.
/// - Provides a canonical, fully parenthesized serialization.
pub mod ast;
/// Engine configuration.
///
/// Declares the resource limits applied to every parse.
pub mod config;
/// The expression engine proper.
///
/// This module ties together lexing, parsing, evaluation and complexity
/// scoring.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and scorer.
/// - Provides the `Engine` entry point carrying the configured limits.
pub mod engine;
/// Provides unified error types for parsing, evaluation and roasting.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches input positions to parse errors.
/// - Distinguishes rejected input from failed evaluation.
pub mod error;
/// The boundary to the roast text generator.
///
/// The engine itself only produces a score and a level. Turning those into a
/// message is the job of a [`Roaster`]; this module defines that seam, an
/// offline implementation and the fallback behavior when a roaster fails.
pub mod roast;
/// General utilities for numeric formatting.
pub mod util;

pub use engine::complexity::{
    level::ComplexityLevel,
    score::{Complexity, score_expression},
};

/// Parses and evaluates one arithmetic expression with the default limits.
///
/// # Errors
/// Returns `EngineError::Parse` if the text is not a valid arithmetic
/// expression, and `EngineError::Eval` if evaluation fails (for example on
/// division by zero).
///
/// # Examples
/// ```
/// use roastulator::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("-3 + 5").unwrap(), 2.0);
///
/// // Names and calls are not arithmetic.
/// assert!(evaluate_expression("__import__('os')").is_err());
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, EngineError> {
    Engine::default().evaluate(text)
}

/// Evaluates, scores and roasts one expression with the default limits.
///
/// # Errors
/// Returns an `EngineError` if the text does not parse or evaluate. Roaster
/// failures are absorbed.
///
/// # Examples
/// ```
/// use roastulator::{ComplexityLevel, roast::CannedRoaster, roast_expression};
///
/// let report = roast_expression("(2+3)*4", &CannedRoaster).unwrap();
/// assert_eq!(report.result, 20.0);
/// assert_eq!(report.complexity.level, ComplexityLevel::Easy);
/// ```
pub fn roast_expression(text: &str, roaster: &dyn Roaster) -> Result<Report, EngineError> {
    Engine::default().report(text, roaster)
}
