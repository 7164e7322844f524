use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A division (or a zero base raised to a negative power) had a zero
    /// divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The tree contains a node the grammar can never produce.
    #[error("Unsupported node: {details}.")]
    UnsupportedNode {
        /// Description of the offending node.
        details: String,
    },
}
