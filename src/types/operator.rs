//! # Comparison and Arithmetic Operators
//!
//! `CompareOp` drives where-clause evaluation and `MathOp` drives in-place
//! arithmetic updates. Which operators a column type accepts is decided in
//! [`codec`](super::codec), not here.

/// Comparison operator for where-clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl CompareOp {
    /// Returns true for `=` and `≠`, the only operators every type supports.
    pub fn is_equality(&self) -> bool {
        matches!(self, CompareOp::Equal | CompareOp::NotEqual)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::GreaterEqual => ">=",
            CompareOp::LessEqual => "<=",
        }
    }
}

/// Arithmetic operator for `update_with_math`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl MathOp {
    /// Returns true if a zero operand must be rejected.
    pub fn rejects_zero(&self) -> bool {
        matches!(self, MathOp::Divide | MathOp::Modulo)
    }
}
