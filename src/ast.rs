use std::fmt;

/// Operators that combine two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `=`; the left operand is always an [`Expr::Variable`].
    Assign,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Assign => "=",
        };
        write!(f, "{symbol}")
    }
}

/// Operators applied to a single subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `not`, written after its operand (`x not;`) or before it (`not x;`).
    Not,
    /// `print`, written before its operand.
    Print,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "not"),
            Self::Print => write!(f, "print"),
        }
    }
}

/// An abstract syntax tree node.
///
/// Every node owns its children and records the byte offset of the token that
/// introduced it, which the evaluator uses for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A `true` or `false` literal, kept as written in the source.
    BooleanLiteral {
        /// Source text of the literal.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary operation or an assignment.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
    /// A `not` or `print` operation.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// Source text of the operator token.
        text:     String,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset of the operator token.
        position: usize,
    },
}

/// Renders the tree in fully parenthesized prefix form, e.g.
/// `(or (xor true true) true)`.
///
/// ```
/// use boolex::ast::{BinaryOperator, Expr};
///
/// let tree = Expr::BinaryOp { op:       BinaryOperator::And,
///                             left:     Box::new(Expr::Variable { name:     "x".into(),
///                                                                 position: 0, }),
///                             right:    Box::new(Expr::BooleanLiteral { text:     "false".into(),
///                                                                       position: 6, }),
///                             position: 2, };
///
/// assert_eq!(tree.to_string(), "(and x false)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BooleanLiteral { text, .. } => write!(f, "{text}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({op} {left} {right})"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op} {operand})"),
        }
    }
}
