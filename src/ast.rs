use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is closed over exactly the three shapes the grammar can produce:
/// numeric literals, negation and the five binary arithmetic operators. Every
/// other construct (names, calls, comparisons, collections) is rejected while
/// parsing and never becomes a node.
///
/// Trees are built fresh for every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. The parser only produces finite, non-negative
    /// values; negative numbers are expressed through [`Expr::UnaryOp`].
    Number(f64),
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a negation node.
    ///
    /// ## Example
    /// ```
    /// use roastulator::ast::{Expr, UnaryOperator};
    ///
    /// let expr = Expr::negate(Expr::Number(3.0));
    /// assert!(matches!(expr, Expr::UnaryOp { op: UnaryOperator::Negate, .. }));
    /// ```
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::UnaryOp { op:   UnaryOperator::Negate,
                        expr: Box::new(expr), }
    }

    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use roastulator::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::Number(2.0), BinaryOperator::Add, Expr::Number(3.0));
    /// assert_eq!(expr.to_string(), "(2 + 3)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Counts the nodes of the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.node_count(),
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents a binary operator.
///
/// This is the complete whitelist of operations the evaluator performs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Canonical serialization.
///
/// Every operation is wrapped in parentheses, so the output parses back into
/// a structurally equal tree regardless of precedence or associativity.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
