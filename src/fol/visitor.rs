//! Visitor protocol over [`Predicate`](crate::fol::Predicate) trees.
//!
//! Same rules as [`ExpressionVisitor`](crate::sql::ExpressionVisitor): one
//! required method per variant, no defaults, no traversal by the nodes.
//!
//! ```compile_fail
//! use exprkit::fol::{FunctionPredicate, PredicateVisitor};
//!
//! struct OnlyFunctions;
//!
//! impl PredicateVisitor for OnlyFunctions {
//!     type Output = ();
//!     fn visit_function_predicate(&mut self, _func: &FunctionPredicate) {}
//! }
//! ```

use crate::fol::predicate::{ConnectivePredicate, FunctionPredicate, NotPredicate};
use crate::fol::quantification::Quantification;

pub trait PredicateVisitor {
    type Output;

    fn visit_quantification(&mut self, quant: &Quantification) -> Self::Output;
    fn visit_function_predicate(&mut self, func: &FunctionPredicate) -> Self::Output;
    fn visit_not(&mut self, not: &NotPredicate) -> Self::Output;
    fn visit_connective(&mut self, conn: &ConnectivePredicate) -> Self::Output;
}
