//! Visitor protocol over [`Expression`](crate::sql::Expression) trees.
//!
//! Every variant has exactly one required method and none of them has a
//! default body, so a visitor that forgets a variant does not compile:
//!
//! ```compile_fail
//! use exprkit::sql::{ColumnRef, ExpressionVisitor};
//!
//! struct OnlyColumns;
//!
//! impl ExpressionVisitor for OnlyColumns {
//!     type Output = ();
//!     fn visit_column(&mut self, _col: &ColumnRef) {}
//! }
//! ```
//!
//! Nodes never walk their own children. A visitor that needs the subtree
//! calls `accept` on the children itself, in whatever order it wants.

use crate::sql::between::BetweenExpression;
use crate::sql::dim_array::SdoDimArrayExpression;
use crate::sql::expr::{ColumnRef, Literal};
use crate::sql::operation::{BinaryExpression, FunctionCall, InListExpression, UnaryExpression};

pub trait ExpressionVisitor {
    /// Result of visiting one node. Visitors that can fail use a `Result`
    /// here; `accept` hands it back untouched.
    type Output;

    fn visit_column(&mut self, col: &ColumnRef) -> Self::Output;
    fn visit_literal(&mut self, lit: &Literal) -> Self::Output;
    fn visit_binary(&mut self, bin: &BinaryExpression) -> Self::Output;
    fn visit_unary(&mut self, un: &UnaryExpression) -> Self::Output;
    fn visit_function(&mut self, call: &FunctionCall) -> Self::Output;
    fn visit_between(&mut self, between: &BetweenExpression) -> Self::Output;
    fn visit_in_list(&mut self, in_list: &InListExpression) -> Self::Output;
    fn visit_sdo_dim_array(&mut self, array: &SdoDimArrayExpression) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::Expression;

    /// Records which method each `accept` landed in, without recursing.
    #[derive(Default)]
    struct Dispatch(Vec<&'static str>);

    impl ExpressionVisitor for Dispatch {
        type Output = ();

        fn visit_column(&mut self, _: &ColumnRef) {
            self.0.push("column");
        }
        fn visit_literal(&mut self, _: &Literal) {
            self.0.push("literal");
        }
        fn visit_binary(&mut self, _: &BinaryExpression) {
            self.0.push("binary");
        }
        fn visit_unary(&mut self, _: &UnaryExpression) {
            self.0.push("unary");
        }
        fn visit_function(&mut self, _: &FunctionCall) {
            self.0.push("function");
        }
        fn visit_between(&mut self, _: &BetweenExpression) {
            self.0.push("between");
        }
        fn visit_in_list(&mut self, _: &InListExpression) {
            self.0.push("in_list");
        }
        fn visit_sdo_dim_array(&mut self, _: &SdoDimArrayExpression) {
            self.0.push("sdo_dim_array");
        }
    }

    /// Fails on literals to show errors pass straight through `accept`.
    struct RejectLiterals;

    impl ExpressionVisitor for RejectLiterals {
        type Output = Result<(), String>;

        fn visit_column(&mut self, _: &ColumnRef) -> Self::Output {
            Ok(())
        }
        fn visit_literal(&mut self, lit: &Literal) -> Self::Output {
            Err(format!("literal {} not allowed", lit.to_sql()))
        }
        fn visit_binary(&mut self, bin: &BinaryExpression) -> Self::Output {
            bin.left().accept(self)?;
            bin.right().accept(self)
        }
        fn visit_unary(&mut self, un: &UnaryExpression) -> Self::Output {
            un.operand().accept(self)
        }
        fn visit_function(&mut self, call: &FunctionCall) -> Self::Output {
            call.args().iter().try_for_each(|arg| arg.accept(self))
        }
        fn visit_between(&mut self, _: &BetweenExpression) -> Self::Output {
            Ok(())
        }
        fn visit_in_list(&mut self, _: &InListExpression) -> Self::Output {
            Ok(())
        }
        fn visit_sdo_dim_array(&mut self, _: &SdoDimArrayExpression) -> Self::Output {
            Ok(())
        }
    }

    #[test]
    fn test_accept_dispatches_once_without_recursing() {
        let exprs = vec![
            Expression::column("a"),
            Expression::int(1),
            Expression::add_expr(Expression::column("a"), Expression::int(1)),
            Expression::is_null(Expression::column("a")),
            Expression::function("f", vec![Expression::column("a")]),
            Expression::between(Expression::column("a"), Expression::int(1), Expression::int(2)),
            Expression::in_list(Expression::column("a"), vec![Expression::int(1)]),
            Expression::SdoDimArray(SdoDimArrayExpression::builder().build()),
        ];

        let mut dispatch = Dispatch::default();
        for expr in &exprs {
            expr.accept(&mut dispatch);
        }
        assert_eq!(
            dispatch.0,
            vec![
                "column",
                "literal",
                "binary",
                "unary",
                "function",
                "between",
                "in_list",
                "sdo_dim_array"
            ]
        );
    }

    #[test]
    fn test_node_accept_matches_enum_accept() {
        let between = BetweenExpression::new(
            Expression::column("a"),
            Expression::int(1),
            Expression::int(2),
            false,
        );
        let mut dispatch = Dispatch::default();
        between.accept(&mut dispatch);
        assert_eq!(dispatch.0, vec!["between"]);
    }

    #[test]
    fn test_visitor_errors_propagate() {
        let ok = Expression::function("f", vec![Expression::column("a")]);
        assert_eq!(ok.accept(&mut RejectLiterals), Ok(()));

        let bad = Expression::eq(Expression::column("a"), Expression::string("x"));
        assert_eq!(
            bad.accept(&mut RejectLiterals),
            Err("literal 'x' not allowed".to_string())
        );
    }
}
