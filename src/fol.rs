//! First-order-logic constraint trees built on top of SQL expressions.

pub mod predicate;
pub mod quantification;
pub mod visitor;

pub use predicate::{
    ConnectivePredicate, FunctionPredicate, LogicalOperator, NotPredicate, Predicate,
};
pub use quantification::{Quantification, QuantificationBuilder, Quantifier, Variable};
pub use visitor::PredicateVisitor;
