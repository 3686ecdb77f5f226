//! Operator definitions for SQL expressions.

use serde::{Deserialize, Serialize};

use crate::config::NotEqualStyle;

/// Binding strength used when deciding whether a child needs parentheses.
/// Higher binds tighter.
pub type Precedence = u8;

pub(crate) const PREC_OR: Precedence = 1;
pub(crate) const PREC_AND: Precedence = 2;
pub(crate) const PREC_NOT: Precedence = 3;
/// Comparisons, `BETWEEN`, `IN`, `LIKE` and `IS [NOT] NULL`. Non-associative.
pub(crate) const PREC_COMPARISON: Precedence = 4;
/// `+`, `-` and `||`.
pub(crate) const PREC_ADDITIVE: Precedence = 5;
pub(crate) const PREC_MULTIPLICATIVE: Precedence = 6;
pub(crate) const PREC_PREFIX: Precedence = 7;
/// Leaves, function calls and constructors never need parentheses.
pub(crate) const PREC_ATOM: Precedence = u8::MAX;

/// Binary operators supported in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,

    // String
    Concat,
    Like,
}

impl BinaryOperator {
    pub fn precedence(&self) -> Precedence {
        match self {
            BinaryOperator::Or => PREC_OR,
            BinaryOperator::And => PREC_AND,
            BinaryOperator::Eq
            | BinaryOperator::Ne
            | BinaryOperator::Lt
            | BinaryOperator::Le
            | BinaryOperator::Gt
            | BinaryOperator::Ge
            | BinaryOperator::Like => PREC_COMPARISON,
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Concat => PREC_ADDITIVE,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => {
                PREC_MULTIPLICATIVE
            }
        }
    }

    /// Comparisons cannot be chained, so neither operand may be another
    /// operation at the same level without parentheses.
    pub fn is_comparison(&self) -> bool {
        self.precedence() == PREC_COMPARISON
    }

    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        self.as_str_with(NotEqualStyle::Standard)
    }

    pub fn as_str_with(&self, not_equal: NotEqualStyle) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Eq => "=",
            BinaryOperator::Ne => not_equal.as_str(),
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Concat => "||",
            BinaryOperator::Like => "LIKE",
        }
    }
}

/// Unary operators supported in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Minus,

    // NULL checks, written after the operand
    IsNull,
    IsNotNull,
}

impl UnaryOperator {
    pub fn precedence(&self) -> Precedence {
        match self {
            UnaryOperator::Not => PREC_NOT,
            UnaryOperator::Minus => PREC_PREFIX,
            UnaryOperator::IsNull | UnaryOperator::IsNotNull => PREC_COMPARISON,
        }
    }

    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::Minus => "-",
            UnaryOperator::IsNull => "IS NULL",
            UnaryOperator::IsNotNull => "IS NOT NULL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_precedence_order() {
        assert!(BinaryOperator::Or.precedence() < BinaryOperator::And.precedence());
        assert!(BinaryOperator::And.precedence() < BinaryOperator::Eq.precedence());
        assert!(BinaryOperator::Eq.precedence() < BinaryOperator::Add.precedence());
        assert!(BinaryOperator::Add.precedence() < BinaryOperator::Mul.precedence());
        assert_eq!(
            BinaryOperator::Like.precedence(),
            BinaryOperator::Ge.precedence()
        );
        assert!(UnaryOperator::Not.precedence() < UnaryOperator::IsNull.precedence());
        assert!(UnaryOperator::Minus.precedence() > BinaryOperator::Mul.precedence());
    }

    #[test]
    fn test_concat_binds_like_addition() {
        assert_eq!(
            BinaryOperator::Concat.precedence(),
            BinaryOperator::Add.precedence()
        );
        assert!(BinaryOperator::Concat.precedence() < BinaryOperator::Mul.precedence());
    }

    #[test]
    fn test_comparison_operators() {
        assert!(BinaryOperator::Eq.is_comparison());
        assert!(BinaryOperator::Like.is_comparison());
        assert!(BinaryOperator::Ge.is_comparison());
        assert!(!BinaryOperator::Concat.is_comparison());
        assert!(!BinaryOperator::And.is_comparison());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOperator::Add.as_str(), "+");
        assert_eq!(BinaryOperator::Eq.as_str(), "=");
        assert_eq!(BinaryOperator::Ne.as_str(), "<>");
        assert_eq!(BinaryOperator::Ne.as_str_with(NotEqualStyle::Bang), "!=");
        assert_eq!(BinaryOperator::And.as_str(), "AND");
        assert_eq!(BinaryOperator::Concat.as_str(), "||");

        assert_eq!(UnaryOperator::Not.as_str(), "NOT");
        assert_eq!(UnaryOperator::IsNull.as_str(), "IS NULL");
        assert_eq!(UnaryOperator::IsNotNull.as_str(), "IS NOT NULL");
    }
}
