//! `BETWEEN` range predicate.

use serde::{Deserialize, Serialize};

use crate::error::{ExprError, ExprResult};
use crate::render::MissingPart;
use crate::sql::expr::Expression;
use crate::sql::visitor::ExpressionVisitor;

/// `test [NOT] BETWEEN begin AND end`
///
/// Any of the three operands may be absent when the node was assembled with
/// the lenient [`BetweenExpressionBuilder::build`]; such a node renders as
/// incomplete and fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenExpression {
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    test: Option<Box<Expression>>,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    begin: Option<Box<Expression>>,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    end: Option<Box<Expression>>,
    negated: bool,
}

impl BetweenExpression {
    pub fn new(test: Expression, begin: Expression, end: Expression, negated: bool) -> Self {
        Self {
            test: Some(Box::new(test)),
            begin: Some(Box::new(begin)),
            end: Some(Box::new(end)),
            negated,
        }
    }

    pub fn builder() -> BetweenExpressionBuilder {
        BetweenExpressionBuilder::default()
    }

    pub fn test(&self) -> Option<&Expression> {
        self.test.as_deref()
    }

    pub fn begin(&self) -> Option<&Expression> {
        self.begin.as_deref()
    }

    pub fn end(&self) -> Option<&Expression> {
        self.end.as_deref()
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Operands that are not set, in rendering order.
    pub fn missing_parts(&self) -> Vec<MissingPart> {
        let mut missing = Vec::new();
        if self.test.is_none() {
            missing.push(MissingPart::BetweenTest);
        }
        if self.begin.is_none() {
            missing.push(MissingPart::BetweenBegin);
        }
        if self.end.is_none() {
            missing.push(MissingPart::BetweenEnd);
        }
        missing
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_between(self)
    }
}

/// Collects the operands of a [`BetweenExpression`] in any order.
#[derive(Debug, Clone, Default)]
pub struct BetweenExpressionBuilder {
    test: Option<Expression>,
    begin: Option<Expression>,
    end: Option<Expression>,
    negated: bool,
}

impl BetweenExpressionBuilder {
    pub fn test(mut self, test: Expression) -> Self {
        self.test = Some(test);
        self
    }

    pub fn begin(mut self, begin: Expression) -> Self {
        self.begin = Some(begin);
        self
    }

    pub fn end(mut self, end: Expression) -> Self {
        self.end = Some(end);
        self
    }

    pub fn negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Freeze the node as-is. Missing operands are kept as gaps.
    pub fn build(self) -> BetweenExpression {
        BetweenExpression {
            test: self.test.map(Box::new),
            begin: self.begin.map(Box::new),
            end: self.end.map(Box::new),
            negated: self.negated,
        }
    }

    /// Freeze the node, failing if any operand is missing.
    pub fn try_build(self) -> ExprResult<BetweenExpression> {
        let node = self.build();
        let missing = node.missing_parts();
        if missing.is_empty() {
            Ok(node)
        } else {
            Err(ExprError::incomplete(missing))
        }
    }
}
