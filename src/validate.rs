//! Structural validation, separate from rendering.
//!
//! Callers that embed rendered text into executable SQL run this pass first
//! (or use [`Rendering::into_complete`](crate::render::Rendering::into_complete)).

use crate::error::{ExprError, ExprResult};
use crate::fol::{
    ConnectivePredicate, FunctionPredicate, NotPredicate, Predicate, PredicateVisitor,
    Quantification,
};
use crate::render::MissingPart;
use crate::sql::{
    BetweenExpression, BinaryExpression, ColumnRef, Expression, ExpressionVisitor, FunctionCall,
    InListExpression, Literal, SdoDimArrayExpression, UnaryExpression,
};

/// Walks a whole tree and records every missing part, in pre-order.
#[derive(Debug, Default)]
pub struct Validator {
    missing: Vec<MissingPart>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> ExprResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ExprError::incomplete(self.missing))
        }
    }
}

impl ExpressionVisitor for Validator {
    type Output = ();

    fn visit_column(&mut self, _col: &ColumnRef) {}

    fn visit_literal(&mut self, lit: &Literal) {
        if !lit.is_finite() {
            self.missing.push(MissingPart::FiniteNumber);
        }
    }

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
        let operands = [
            (between.test(), MissingPart::BetweenTest),
            (between.begin(), MissingPart::BetweenBegin),
            (between.end(), MissingPart::BetweenEnd),
        ];
        for (operand, part) in operands {
            match operand {
                Some(expr) => expr.accept(self),
                None => self.missing.push(part),
            }
        }
    }

    fn visit_in_list(&mut self, in_list: &InListExpression) {
        in_list.expr().accept(self);
        if in_list.list().is_empty() {
            self.missing.push(MissingPart::InListItems);
        }
        for item in in_list.list() {
            item.accept(self);
        }
    }

    fn visit_sdo_dim_array(&mut self, array: &SdoDimArrayExpression) {
        if array.is_empty() {
            self.missing.push(MissingPart::DimArrayElements);
        }
        for element in array.elements() {
            if !element.is_finite() {
                self.missing.push(MissingPart::FiniteNumber);
            }
        }
    }
}

impl PredicateVisitor for Validator {
    type Output = ();

    fn visit_quantification(&mut self, quant: &Quantification) {
        if quant.variable().is_none() {
            self.missing.push(MissingPart::QuantifiedVariable);
        }
        match quant.condition() {
            Some(cond) => cond.accept(self),
            None => self.missing.push(MissingPart::QuantifiedCondition),
        }
    }

    fn visit_function_predicate(&mut self, func: &FunctionPredicate) {
        for arg in func.args() {
            arg.accept(self);
        }
    }

    fn visit_not(&mut self, not: &NotPredicate) {
        not.operand().accept(self);
    }

    fn visit_connective(&mut self, conn: &ConnectivePredicate) {
        if conn.operands().is_empty() {
            self.missing.push(MissingPart::ConnectiveOperands);
        }
        for operand in conn.operands() {
            operand.accept(self);
        }
    }
}

pub fn validate_expression(expr: &Expression) -> ExprResult<()> {
    let mut validator = Validator::new();
    expr.accept(&mut validator);
    validator.finish()
}

pub fn validate_predicate(predicate: &Predicate) -> ExprResult<()> {
    let mut validator = Validator::new();
    predicate.accept(&mut validator);
    validator.finish()
}
