//! Text synthesis for expression and predicate trees.

use log::debug;

use crate::config::RenderConfig;
use crate::fol::{
    ConnectivePredicate, FunctionPredicate, NotPredicate, Predicate, PredicateVisitor,
    Quantification,
};
use crate::render::rendering::{MissingPart, Rendering};
use crate::sql::operator::{Precedence, PREC_COMPARISON, PREC_NOT, PREC_PREFIX};
use crate::sql::{
    BetweenExpression, BinaryExpression, ColumnRef, Expression, ExpressionVisitor, FunctionCall,
    InListExpression, Literal, SdoDimArrayExpression, UnaryExpression, UnaryOperator,
};

/// Renders trees to text, recording every gap it has to paper over.
///
/// Rendering is pure: no I/O, and the same tree always yields the same text.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    missing: Vec<MissingPart>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            missing: Vec::new(),
        }
    }

    pub fn render_expression(config: &RenderConfig, expr: &Expression) -> Rendering {
        let mut renderer = Renderer::new(config);
        let text = expr.accept(&mut renderer);
        renderer.finish(text)
    }

    pub fn render_predicate(config: &RenderConfig, predicate: &Predicate) -> Rendering {
        let mut renderer = Renderer::new(config);
        let text = predicate.accept(&mut renderer);
        renderer.finish(text)
    }

    fn finish(self, text: String) -> Rendering {
        if !self.missing.is_empty() {
            debug!("rendered incomplete tree {:?}: missing {:?}", text, self.missing);
        }
        Rendering::new(text, self.missing)
    }

    /// Render `expr`, parenthesised when it binds looser than `min`.
    fn operand(&mut self, expr: &Expression, min: Precedence) -> String {
        let text = expr.accept(self);
        if expr.precedence() < min {
            format!("({})", text)
        } else {
            text
        }
    }

    fn optional_operand(
        &mut self,
        expr: Option<&Expression>,
        min: Precedence,
        part: MissingPart,
    ) -> String {
        match expr {
            Some(expr) => self.operand(expr, min),
            None => self.gap(part),
        }
    }

    fn gap(&mut self, part: MissingPart) -> String {
        self.missing.push(part);
        part.placeholder().to_string()
    }

    fn join(&mut self, exprs: &[Expression], separator: &str) -> String {
        exprs
            .iter()
            .map(|e| e.accept(self))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl ExpressionVisitor for Renderer<'_> {
    type Output = String;

    fn visit_column(&mut self, col: &ColumnRef) -> String {
        col.to_sql()
    }

    fn visit_literal(&mut self, lit: &Literal) -> String {
        if !lit.is_finite() {
            return self.gap(MissingPart::FiniteNumber);
        }
        lit.to_sql()
    }

    fn visit_binary(&mut self, bin: &BinaryExpression) -> String {
        let op = bin.op();
        let prec = op.precedence();
        // Left-associative: only a left operand may sit at the same level,
        // and not even that for comparisons.
        let left_min = if op.is_comparison() { prec + 1 } else { prec };
        let left = self.operand(bin.left(), left_min);
        let right = self.operand(bin.right(), prec + 1);
        format!(
            "{} {} {}",
            left,
            op.as_str_with(self.config.not_equal),
            right
        )
    }

    fn visit_unary(&mut self, un: &UnaryExpression) -> String {
        match un.op() {
            UnaryOperator::Not => format!("NOT {}", self.operand(un.operand(), PREC_NOT)),
            UnaryOperator::Minus => {
                let operand = self.operand(un.operand(), PREC_PREFIX);
                // "--" would open a line comment
                if operand.starts_with('-') {
                    format!("-({})", operand)
                } else {
                    format!("-{}", operand)
                }
            }
            op @ (UnaryOperator::IsNull | UnaryOperator::IsNotNull) => format!(
                "{} {}",
                self.operand(un.operand(), PREC_COMPARISON + 1),
                op.as_str()
            ),
        }
    }

    fn visit_function(&mut self, call: &FunctionCall) -> String {
        let args = self.join(call.args(), ", ");
        format!("{}({})", call.name(), args)
    }

    fn visit_between(&mut self, between: &BetweenExpression) -> String {
        let min = PREC_COMPARISON + 1;
        let test = self.optional_operand(between.test(), min, MissingPart::BetweenTest);
        let begin = self.optional_operand(between.begin(), min, MissingPart::BetweenBegin);
        let end = self.optional_operand(between.end(), min, MissingPart::BetweenEnd);
        let not = if between.negated() { "NOT " } else { "" };
        format!("{} {}BETWEEN {} AND {}", test, not, begin, end)
    }

    fn visit_in_list(&mut self, in_list: &InListExpression) -> String {
        let expr = self.operand(in_list.expr(), PREC_COMPARISON + 1);
        let items = if in_list.list().is_empty() {
            self.gap(MissingPart::InListItems)
        } else {
            self.join(in_list.list(), ", ")
        };
        let not = if in_list.negated() { "NOT " } else { "" };
        format!("{} {}IN ({})", expr, not, items)
    }

    fn visit_sdo_dim_array(&mut self, array: &SdoDimArrayExpression) -> String {
        let elements = if array.is_empty() {
            self.gap(MissingPart::DimArrayElements)
        } else {
            array
                .elements()
                .iter()
                .map(|e| {
                    if e.is_finite() {
                        e.to_sql(self.config)
                    } else {
                        self.gap(MissingPart::FiniteNumber)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{}({})",
            self.config.sdo_constructor("SDO_DIM_ARRAY"),
            elements
        )
    }
}

impl PredicateVisitor for Renderer<'_> {
    type Output = String;

    fn visit_quantification(&mut self, quant: &Quantification) -> String {
        let variable = match quant.variable() {
            Some(var) => var.name().to_string(),
            None => self.gap(MissingPart::QuantifiedVariable),
        };
        let condition = match quant.condition() {
            Some(cond) => cond.accept(self),
            None => self.gap(MissingPart::QuantifiedCondition),
        };
        format!(
            "{} ({} | {})",
            quant.quantifier().as_str(),
            variable,
            condition
        )
    }

    fn visit_function_predicate(&mut self, func: &FunctionPredicate) -> String {
        let args = self.join(func.args(), ",");
        format!("{}({})", func.name(), args)
    }

    fn visit_not(&mut self, not: &NotPredicate) -> String {
        format!("NOT ({})", not.operand().accept(self))
    }

    fn visit_connective(&mut self, conn: &ConnectivePredicate) -> String {
        if conn.operands().is_empty() {
            return format!("({})", self.gap(MissingPart::ConnectiveOperands));
        }
        let separator = format!(" {} ", conn.op().as_str());
        let operands = conn
            .operands()
            .iter()
            .map(|p| p.accept(self))
            .collect::<Vec<_>>()
            .join(&separator);
        format!("({})", operands)
    }
}
