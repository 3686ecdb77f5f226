//! Expression AST definitions.

use serde::{Deserialize, Serialize};

use crate::sql::between::BetweenExpression;
use crate::sql::dim_array::SdoDimArrayExpression;
use crate::sql::operation::{BinaryExpression, FunctionCall, InListExpression, UnaryExpression};
use crate::sql::operator::{BinaryOperator, Precedence, UnaryOperator, PREC_ATOM, PREC_COMPARISON};
use crate::sql::visitor::ExpressionVisitor;

/// Column reference, optionally qualified by a table name or alias
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    table: Option<String>,
    name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_sql(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.name),
            None => self.name.clone(),
        }
    }
}

/// Literal constant in an expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl Literal {
    pub fn string(val: impl Into<String>) -> Self {
        Literal::String(val.into())
    }

    /// `false` only for `inf` and `NaN` numbers, which SQL cannot spell.
    pub fn is_finite(&self) -> bool {
        match self {
            Literal::Number(v) => v.is_finite(),
            _ => true,
        }
    }

    /// SQL text of the literal. Strings are single-quoted with embedded
    /// quotes doubled.
    pub fn to_sql(&self) -> String {
        match self {
            Literal::Null => "NULL".to_string(),
            Literal::Boolean(true) => "TRUE".to_string(),
            Literal::Boolean(false) => "FALSE".to_string(),
            Literal::Integer(v) => v.to_string(),
            Literal::Number(v) => v.to_string(),
            Literal::String(s) => quote(s),
        }
    }
}

pub(crate) fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Expression tree node.
///
/// The variant set is closed: every [`ExpressionVisitor`] handles each
/// variant explicitly. Compound variants wrap structs whose fields are only
/// reachable through accessors, so a child cannot be modified once it has
/// been attached to a parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Column(ColumnRef),
    Literal(Literal),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Function(FunctionCall),
    Between(BetweenExpression),
    InList(InListExpression),
    SdoDimArray(SdoDimArrayExpression),
}

impl Expression {
    /// Dispatch to the visitor method matching this variant.
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expression::Column(col) => visitor.visit_column(col),
            Expression::Literal(lit) => visitor.visit_literal(lit),
            Expression::Binary(bin) => visitor.visit_binary(bin),
            Expression::Unary(un) => visitor.visit_unary(un),
            Expression::Function(call) => visitor.visit_function(call),
            Expression::Between(between) => visitor.visit_between(between),
            Expression::InList(in_list) => visitor.visit_in_list(in_list),
            Expression::SdoDimArray(array) => visitor.visit_sdo_dim_array(array),
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Binary(bin) => bin.op().precedence(),
            Expression::Unary(un) => un.op().precedence(),
            Expression::Between(_) | Expression::InList(_) => PREC_COMPARISON,
            Expression::Column(_)
            | Expression::Literal(_)
            | Expression::Function(_)
            | Expression::SdoDimArray(_) => PREC_ATOM,
        }
    }

    /// Create a column reference expression
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(ColumnRef::new(name))
    }

    /// Create a qualified column reference (table.column)
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Expression::Column(ColumnRef::qualified(table, name))
    }

    pub fn literal(lit: Literal) -> Self {
        Expression::Literal(lit)
    }

    pub fn null() -> Self {
        Expression::Literal(Literal::Null)
    }

    pub fn int(val: i64) -> Self {
        Expression::Literal(Literal::Integer(val))
    }

    pub fn number(val: f64) -> Self {
        Expression::Literal(Literal::Number(val))
    }

    pub fn string(val: impl Into<String>) -> Self {
        Expression::Literal(Literal::string(val))
    }

    pub fn boolean(val: bool) -> Self {
        Expression::Literal(Literal::Boolean(val))
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(op, left, right))
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression::new(op, operand))
    }

    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function(FunctionCall::new(name, args))
    }

    /// Create a `test BETWEEN begin AND end` expression
    pub fn between(test: Expression, begin: Expression, end: Expression) -> Self {
        Expression::Between(BetweenExpression::new(test, begin, end, false))
    }

    /// Create a `test NOT BETWEEN begin AND end` expression
    pub fn not_between(test: Expression, begin: Expression, end: Expression) -> Self {
        Expression::Between(BetweenExpression::new(test, begin, end, true))
    }

    pub fn in_list(expr: Expression, list: Vec<Expression>) -> Self {
        Expression::InList(InListExpression::new(expr, list, false))
    }

    pub fn not_in_list(expr: Expression, list: Vec<Expression>) -> Self {
        Expression::InList(InListExpression::new(expr, list, true))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    pub fn not_expr(operand: Expression) -> Self {
        Self::unary(UnaryOperator::Not, operand)
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Eq, left, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Ne, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Lt, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Le, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Gt, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Ge, left, right)
    }

    pub fn add_expr(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    pub fn sub_expr(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Sub, left, right)
    }

    pub fn mul_expr(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Mul, left, right)
    }

    pub fn div_expr(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Div, left, right)
    }

    pub fn is_null(operand: Expression) -> Self {
        Self::unary(UnaryOperator::IsNull, operand)
    }

    pub fn is_not_null(operand: Expression) -> Self {
        Self::unary(UnaryOperator::IsNotNull, operand)
    }
}

impl From<ColumnRef> for Expression {
    fn from(col: ColumnRef) -> Self {
        Expression::Column(col)
    }
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Expression::Literal(lit)
    }
}

impl From<BetweenExpression> for Expression {
    fn from(between: BetweenExpression) -> Self {
        Expression::Between(between)
    }
}

impl From<SdoDimArrayExpression> for Expression {
    fn from(array: SdoDimArrayExpression) -> Self {
        Expression::SdoDimArray(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ref() {
        let col = ColumnRef::new("age");
        assert_eq!(col.name(), "age");
        assert!(col.table().is_none());
        assert_eq!(col.to_sql(), "age");

        let col = ColumnRef::qualified("p", "name");
        assert_eq!(col.table(), Some("p"));
        assert_eq!(col.to_sql(), "p.name");
    }

    #[test]
    fn test_literal_sql() {
        assert_eq!(Literal::Null.to_sql(), "NULL");
        assert_eq!(Literal::Boolean(true).to_sql(), "TRUE");
        assert_eq!(Literal::Boolean(false).to_sql(), "FALSE");
        assert_eq!(Literal::Integer(-42).to_sql(), "-42");
        assert_eq!(Literal::Number(0.05).to_sql(), "0.05");
        assert_eq!(Literal::Number(180.0).to_sql(), "180");
        assert_eq!(Literal::string("O'Brien").to_sql(), "'O''Brien'");
    }

    #[test]
    fn test_literal_is_finite() {
        assert!(Literal::Number(0.05).is_finite());
        assert!(Literal::Integer(i64::MAX).is_finite());
        assert!(Literal::Null.is_finite());
        assert!(!Literal::Number(f64::INFINITY).is_finite());
        assert!(!Literal::Number(f64::NAN).is_finite());
    }

    #[test]
    fn test_expression_builders() {
        let expr = Expression::gt(Expression::column("age"), Expression::int(18));
        match &expr {
            Expression::Binary(bin) => {
                assert_eq!(bin.op(), BinaryOperator::Gt);
                assert_eq!(bin.left(), &Expression::column("age"));
                assert_eq!(bin.right(), &Expression::int(18));
            }
            _ => panic!("Expected binary expression"),
        }

        let expr = Expression::not_between(
            Expression::column("x"),
            Expression::int(1),
            Expression::int(10),
        );
        match &expr {
            Expression::Between(between) => assert!(between.negated()),
            _ => panic!("Expected BETWEEN expression"),
        }

        assert!(matches!(
            Expression::is_null(Expression::column("x")),
            Expression::Unary(_)
        ));
        assert!(matches!(
            Expression::in_list(Expression::column("x"), vec![Expression::int(1)]),
            Expression::InList(_)
        ));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(Expression::column("a").precedence(), PREC_ATOM);
        assert_eq!(Expression::function("f", vec![]).precedence(), PREC_ATOM);
        assert_eq!(
            Expression::between(Expression::column("a"), Expression::int(1), Expression::int(2))
                .precedence(),
            PREC_COMPARISON
        );
        assert_eq!(
            Expression::or(Expression::column("a"), Expression::column("b")).precedence(),
            BinaryOperator::Or.precedence()
        );
    }
}
