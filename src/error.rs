use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing an
/// expression: malformed syntax, disallowed constructs, and input that
/// exceeds the configured limits.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types raised while reducing a parsed tree to a number,
/// such as division by zero.
pub mod eval_error;
/// Roast generation errors.
///
/// Failures of the text-generation collaborator. They are absorbed at the
/// boundary and never reach an evaluation result.
pub mod roast_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use roast_error::RoastError;

/// Either kind of failure the engine can report for an expression.
///
/// Callers can tell a rejected input apart from an input that parsed but
/// could not be computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The text is not a valid arithmetic expression.
    #[error("Invalid or unsafe expression: {0}")]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error("Could not evaluate expression: {0}")]
    Eval(#[from] EvalError),
}

impl EngineError {
    /// Returns `true` if the input was rejected by the parser.
    ///
    /// ## Example
    /// ```
    /// use roastulator::evaluate_expression;
    ///
    /// assert!(evaluate_expression("2 +").unwrap_err().is_parse());
    /// ```
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if the input parsed but evaluation failed.
    ///
    /// ## Example
    /// ```
    /// use roastulator::evaluate_expression;
    ///
    /// assert!(evaluate_expression("5 / 0").unwrap_err().is_eval());
    /// ```
    #[must_use]
    pub const fn is_eval(&self) -> bool {
        matches!(self, Self::Eval(_))
    }
}
