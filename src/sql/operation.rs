//! Operator, function-call and IN-list nodes.

use serde::{Deserialize, Serialize};

use crate::sql::expr::Expression;
use crate::sql::operator::{BinaryOperator, UnaryOperator};
use crate::sql::visitor::ExpressionVisitor;

/// `left op right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    op: BinaryOperator,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    left: Box<Expression>,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    right: Box<Expression>,
}

impl BinaryExpression {
    pub fn new(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn op(&self) -> BinaryOperator {
        self.op
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_binary(self)
    }
}

/// Prefix (`NOT x`, `-x`) or postfix (`x IS NULL`) operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    op: UnaryOperator,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    operand: Box<Expression>,
}

impl UnaryExpression {
    pub fn new(op: UnaryOperator, operand: Expression) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn op(&self) -> UnaryOperator {
        self.op
    }

    pub fn operand(&self) -> &Expression {
        &self.operand
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_unary(self)
    }
}

/// Function call, `name(arg0, arg1, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    name: String,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    args: Vec<Expression>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function(self)
    }
}

/// `expr [NOT] IN (item, ...)`
///
/// An empty list is representable but renders as incomplete, since `IN ()`
/// is not valid SQL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InListExpression {
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    expr: Box<Expression>,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    list: Vec<Expression>,
    negated: bool,
}

impl InListExpression {
    pub fn new(expr: Expression, list: Vec<Expression>, negated: bool) -> Self {
        Self {
            expr: Box::new(expr),
            list,
            negated,
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn list(&self) -> &[Expression] {
        &self.list
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_in_list(self)
    }
}
