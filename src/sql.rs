//! SQL expression trees.
//!
//! This module provides:
//! - The closed set of expression node variants
//! - Operators and their precedence
//! - The visitor protocol and a column-reference collector

pub mod between;
pub mod columns;
pub mod dim_array;
pub mod expr;
pub mod operation;
pub mod operator;
pub mod visitor;

pub use between::{BetweenExpression, BetweenExpressionBuilder};
pub use columns::{referenced_columns, ColumnCollector};
pub use dim_array::{DimElement, SdoDimArrayExpression, SdoDimArrayExpressionBuilder};
pub use expr::{ColumnRef, Expression, Literal};
pub use operation::{BinaryExpression, FunctionCall, InListExpression, UnaryExpression};
pub use operator::{BinaryOperator, Precedence, UnaryOperator};
pub use visitor::ExpressionVisitor;
