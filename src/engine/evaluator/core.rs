use log::debug;

use crate::{
    ast::Expr,
    engine::evaluator::{binary::eval_binary, unary::eval_unary},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns the resulting number.
///
/// The evaluator dispatches on the three node shapes with an exhaustive
/// match. Results follow IEEE-754: overflow yields an infinity and invalid
/// operations (such as a fractional power of a negative base) yield NaN.
/// Both count as successful evaluations.
///
/// # Errors
/// - `EvalError::DivisionByZero` for a zero divisor, or a zero base raised to
///   a negative exponent.
/// - `EvalError::UnsupportedNode` for a literal the parser can never produce
///   (negative or non-finite).
///
/// # Example
/// ```
/// use roastulator::{
///     engine::{evaluator::core::evaluate, parser::core::parse},
///     error::EvalError,
/// };
///
/// assert_eq!(evaluate(&parse("2 + 3 * 4").unwrap()), Ok(14.0));
/// assert_eq!(evaluate(&parse("5 / 0").unwrap()), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let result = eval_node(expr);

    match &result {
        Ok(value) => debug!("Expression {expr} evaluated to {value}"),
        Err(e) => debug!("Expression {expr} failed to evaluate: {e}"),
    }

    result
}

fn eval_node(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number(value) => eval_literal(*value),
        Expr::UnaryOp { op, expr } => Ok(eval_unary(*op, eval_node(expr)?)),
        Expr::BinaryOp { left, op, right } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            eval_binary(*op, left, right)
        },
    }
}

/// Checks that a literal is one the grammar could have produced.
fn eval_literal(value: f64) -> EvalResult<f64> {
    if !value.is_finite() {
        return Err(EvalError::UnsupportedNode { details: format!("non-finite literal {value}") });
    }
    if value.is_sign_negative() {
        return Err(EvalError::UnsupportedNode { details: format!("negative literal {value}; negation must be a unary node") });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn hand_built_trees_with_impossible_literals_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, -1.0, -0.0] {
            let err = evaluate(&Expr::Number(value)).unwrap_err();
            assert!(matches!(err, EvalError::UnsupportedNode { .. }), "{value}");
        }
    }

    #[test]
    fn unsupported_node_deep_in_tree_propagates() {
        let tree = Expr::binary(Expr::Number(1.0),
                                BinaryOperator::Add,
                                Expr::negate(Expr::Number(f64::NAN)));
        assert!(matches!(evaluate(&tree), Err(EvalError::UnsupportedNode { .. })));
    }

    #[test]
    fn left_operand_error_wins() {
        let tree = Expr::binary(Expr::binary(Expr::Number(1.0), BinaryOperator::Div, Expr::Number(0.0)),
                                BinaryOperator::Add,
                                Expr::Number(-1.0));
        assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
    }
}
