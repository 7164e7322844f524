use crate::{ast::BinaryOperator, engine::evaluator::core::EvalResult, error::EvalError};

/// Evaluates a binary operation between two numbers.
///
/// The match over [`BinaryOperator`] is exhaustive, so the whitelist of
/// operations is fixed at compile time.
///
/// Division by zero is checked explicitly, for both `0.0` and `-0.0`. A zero
/// base raised to a negative exponent is also a division by zero, since
/// `0 ** -n` is `1 / 0 ** n`. Everything else follows IEEE-754.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use roastulator::{ast::BinaryOperator, engine::evaluator::binary::eval_binary, error::EvalError};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// assert_eq!(eval_binary(BinaryOperator::Pow, 0.0, -1.0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Pow => {
            if left == 0.0 && right < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left.powf(right))
        },
    }
}
