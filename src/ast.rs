//! Expression tree produced by the parser.
//!
//! The set of node kinds is closed. Rendering via `Display` is the
//! canonical string form used for golden comparisons:
//!
//! - a literal renders as its lexeme: `42`
//! - an operator token renders as the lexeme that was matched: `+`
//! - a binary operation renders as `(<lhs> <op> <rhs>)`
use std::fmt;
use std::sync::Arc;

use num_traits::PrimInt;

use crate::operators::{Associativity, Operator};

/// Integer types usable as literal values. The literal type's range
/// is what determines when a literal overflows.
pub trait IntLiteral: PrimInt + fmt::Display + fmt::Debug + Send + Sync + 'static {}

impl<T> IntLiteral for T where
    T: PrimInt + fmt::Display + fmt::Debug + Send + Sync + 'static
{
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr<T = i32> {
    pub kind: ExprKind<T>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind<T> {
    Literal(Literal<T>),
    Operator(OperatorToken),
    BinaryOp(Box<Expr<T>>, OperatorToken, Box<Expr<T>>),
}

impl<T: IntLiteral> Expr<T> {
    pub fn new(kind: ExprKind<T>) -> Self {
        Self { kind }
    }

    pub fn new_literal(literal: Literal<T>) -> Self {
        Self::new(ExprKind::Literal(literal))
    }

    pub fn new_operator(token: OperatorToken) -> Self {
        Self::new(ExprKind::Operator(token))
    }

    pub fn new_binary_op(lhs: Expr<T>, op: OperatorToken, rhs: Expr<T>) -> Self {
        Self::new(ExprKind::BinaryOp(Box::new(lhs), op, Box::new(rhs)))
    }

    pub fn literal(&self) -> Option<&Literal<T>> {
        if let ExprKind::Literal(literal) = &self.kind {
            return Some(literal);
        }
        None
    }

    pub fn binary_op(&self) -> Option<(&Expr<T>, &OperatorToken, &Expr<T>)> {
        if let ExprKind::BinaryOp(lhs, op, rhs) = &self.kind {
            return Some((lhs, op, rhs));
        }
        None
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Literal(_))
    }

    /// Number of literals (leaves) in the tree.
    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            ExprKind::Literal(_) | ExprKind::Operator(_) => 1,
            ExprKind::BinaryOp(lhs, _, rhs) => lhs.leaf_count() + rhs.leaf_count(),
        }
    }

    /// Height of the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.kind {
            ExprKind::Literal(_) | ExprKind::Operator(_) => 1,
            ExprKind::BinaryOp(lhs, _, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

impl<T: IntLiteral> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(literal) => write!(f, "{literal}"),
            ExprKind::Operator(token) => write!(f, "{token}"),
            ExprKind::BinaryOp(lhs, op, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

// Literal -------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal<T> {
    value: T,
    lexeme: String,
}

impl<T: IntLiteral> Literal<T> {
    /// Create a literal, checking that the value renders back to
    /// exactly the lexeme it was read from.
    pub fn new<S: Into<String>>(value: T, lexeme: S) -> Result<Self, String> {
        let lexeme = lexeme.into();
        let rendered = value.to_string();
        if rendered != lexeme {
            return Err(format!(
                "Literal value {rendered} does not match its lexeme {lexeme:?}"
            ));
        }
        Ok(Self { value, lexeme })
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }
}

impl<T> fmt::Display for Literal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

// Operator token ------------------------------------------------------

/// An occurrence of an operator in the input: the operator definition
/// plus which of its lexemes was matched.
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorToken {
    operator: Arc<Operator>,
    lexeme: String,
}

impl OperatorToken {
    pub fn new<S: Into<String>>(operator: Arc<Operator>, lexeme: S) -> Self {
        Self { operator, lexeme: lexeme.into() }
    }

    pub fn operator(&self) -> &Arc<Operator> {
        &self.operator
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn precedence(&self) -> u32 {
        self.operator.precedence()
    }

    pub fn associativity(&self) -> Associativity {
        self.operator.associativity()
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

impl fmt::Debug for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OperatorToken({:?}, precedence {}, {:?})",
            self.lexeme,
            self.precedence(),
            self.associativity()
        )
    }
}
