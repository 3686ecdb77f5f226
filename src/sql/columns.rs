//! Column-reference extraction.

use crate::sql::between::BetweenExpression;
use crate::sql::dim_array::SdoDimArrayExpression;
use crate::sql::expr::{ColumnRef, Expression, Literal};
use crate::sql::operation::{BinaryExpression, FunctionCall, InListExpression, UnaryExpression};
use crate::sql::visitor::ExpressionVisitor;

/// Collects referenced columns in pre-order, each one once, in the order
/// they are first seen.
#[derive(Debug, Default)]
pub struct ColumnCollector {
    columns: Vec<ColumnRef>,
}

impl ColumnCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_columns(self) -> Vec<ColumnRef> {
        self.columns
    }
}

impl ExpressionVisitor for ColumnCollector {
    type Output = ();

    fn visit_column(&mut self, col: &ColumnRef) {
        if !self.columns.contains(col) {
            self.columns.push(col.clone());
        }
    }

    fn visit_literal(&mut self, _lit: &Literal) {}

    fn visit_binary(&mut self, bin: &BinaryExpression) {
        bin.left().accept(self);
        bin.right().accept(self);
    }

    fn visit_unary(&mut self, un: &UnaryExpression) {
        un.operand().accept(self);
    }

    fn visit_function(&mut self, call: &FunctionCall) {
        for arg in call.args() {
            arg.accept(self);
        }
    }

    fn visit_between(&mut self, between: &BetweenExpression) {
        for operand in [between.test(), between.begin(), between.end()]
            .into_iter()
            .flatten()
        {
            operand.accept(self);
        }
    }

    fn visit_in_list(&mut self, in_list: &InListExpression) {
        in_list.expr().accept(self);
        for item in in_list.list() {
            item.accept(self);
        }
    }

    // Dimension elements carry names and bounds, not column references.
    fn visit_sdo_dim_array(&mut self, _array: &SdoDimArrayExpression) {}
}

/// Columns referenced anywhere in `expr`.
pub fn referenced_columns(expr: &Expression) -> Vec<ColumnRef> {
    let mut collector = ColumnCollector::new();
    expr.accept(&mut collector);
    collector.into_columns()
}
