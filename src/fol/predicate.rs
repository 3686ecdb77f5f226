//! First-order-logic predicate nodes.

use serde::{Deserialize, Serialize};

use crate::fol::quantification::{Quantification, Quantifier, Variable};
use crate::fol::visitor::PredicateVisitor;
use crate::sql::Expression;

/// Logical proposition node. Closed set, like [`Expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    Quantification(Quantification),
    Function(FunctionPredicate),
    Not(NotPredicate),
    Connective(ConnectivePredicate),
}

impl Predicate {
    pub fn accept<V: PredicateVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Predicate::Quantification(quant) => visitor.visit_quantification(quant),
            Predicate::Function(func) => visitor.visit_function_predicate(func),
            Predicate::Not(not) => visitor.visit_not(not),
            Predicate::Connective(conn) => visitor.visit_connective(conn),
        }
    }

    pub fn for_all(variable: Variable, condition: Predicate) -> Self {
        Predicate::Quantification(Quantification::new(Quantifier::ForAll, variable, condition))
    }

    pub fn exists(variable: Variable, condition: Predicate) -> Self {
        Predicate::Quantification(Quantification::new(Quantifier::Exists, variable, condition))
    }

    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Predicate::Function(FunctionPredicate::new(name, args))
    }

    pub fn negate(predicate: Predicate) -> Self {
        Predicate::Not(NotPredicate::new(predicate))
    }

    pub fn and(operands: Vec<Predicate>) -> Self {
        Predicate::Connective(ConnectivePredicate::new(LogicalOperator::And, operands))
    }

    pub fn or(operands: Vec<Predicate>) -> Self {
        Predicate::Connective(ConnectivePredicate::new(LogicalOperator::Or, operands))
    }
}

impl From<Quantification> for Predicate {
    fn from(quant: Quantification) -> Self {
        Predicate::Quantification(quant)
    }
}

impl From<FunctionPredicate> for Predicate {
    fn from(func: FunctionPredicate) -> Self {
        Predicate::Function(func)
    }
}

/// Named predicate applied to expression arguments, `name(a,b)`.
///
/// Truth evaluation is not provided; these nodes only describe constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionPredicate {
    name: String,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    args: Vec<Expression>,
}

impl FunctionPredicate {
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

    pub fn accept<V: PredicateVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function_predicate(self)
    }
}

/// `NOT (p)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotPredicate {
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    operand: Box<Predicate>,
}

impl NotPredicate {
    pub fn new(operand: Predicate) -> Self {
        Self {
            operand: Box::new(operand),
        }
    }

    pub fn operand(&self) -> &Predicate {
        &self.operand
    }

    pub fn accept<V: PredicateVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_not(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// `(p1 AND p2 AND ...)` or `(p1 OR p2 OR ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivePredicate {
    op: LogicalOperator,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    operands: Vec<Predicate>,
}

impl ConnectivePredicate {
    pub fn new(op: LogicalOperator, operands: Vec<Predicate>) -> Self {
        Self { op, operands }
    }

    pub fn op(&self) -> LogicalOperator {
        self.op
    }

    pub fn operands(&self) -> &[Predicate] {
        &self.operands
    }

    pub fn accept<V: PredicateVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_connective(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_predicate() {
        let func = FunctionPredicate::new("f", vec![Expression::column("a")]);
        assert_eq!(func.name(), "f");
        assert_eq!(func.args(), &[Expression::column("a")]);

        let empty = FunctionPredicate::new("g", vec![]);
        assert!(empty.args().is_empty());
    }

    #[test]
    fn test_predicate_builders() {
        let inner = Predicate::function("p", vec![]);
        match Predicate::for_all(Variable::new("x"), inner.clone()) {
            Predicate::Quantification(q) => {
                assert_eq!(q.quantifier(), Quantifier::ForAll);
                assert_eq!(q.condition(), Some(&inner));
            }
            _ => panic!("Expected quantification"),
        }

        match Predicate::or(vec![inner.clone(), Predicate::negate(inner.clone())]) {
            Predicate::Connective(conn) => {
                assert_eq!(conn.op(), LogicalOperator::Or);
                assert_eq!(conn.operands().len(), 2);
                assert!(matches!(conn.operands()[1], Predicate::Not(_)));
            }
            _ => panic!("Expected connective"),
        }
    }
}
