//! Quantified conditions, `FORALL (x | p)` and `EXISTS (x | p)`.

use serde::{Deserialize, Serialize};

use crate::error::{ExprError, ExprResult};
use crate::fol::predicate::Predicate;
use crate::fol::visitor::PredicateVisitor;
use crate::render::MissingPart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    ForAll,
    Exists,
}

impl Quantifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantifier::ForAll => "FORALL",
            Quantifier::Exists => "EXISTS",
        }
    }
}

/// Variable bound by a quantifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `quantifier (variable | condition)`
///
/// Variable and condition may be absent on a leniently built node. Rendering
/// then substitutes `<variable is null>` / `<condition is null>` and reports
/// the result as incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantification {
    quantifier: Quantifier,
    variable: Option<Variable>,
    #[serde(deserialize_with = "crate::codec::deserialize_nested")]
    condition: Option<Box<Predicate>>,
}

impl Quantification {
    pub fn new(quantifier: Quantifier, variable: Variable, condition: Predicate) -> Self {
        Self {
            quantifier,
            variable: Some(variable),
            condition: Some(Box::new(condition)),
        }
    }

    pub fn builder(quantifier: Quantifier) -> QuantificationBuilder {
        QuantificationBuilder {
            quantifier,
            variable: None,
            condition: None,
        }
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn variable(&self) -> Option<&Variable> {
        self.variable.as_ref()
    }

    pub fn condition(&self) -> Option<&Predicate> {
        self.condition.as_deref()
    }

    pub fn missing_parts(&self) -> Vec<MissingPart> {
        let mut missing = Vec::new();
        if self.variable.is_none() {
            missing.push(MissingPart::QuantifiedVariable);
        }
        if self.condition.is_none() {
            missing.push(MissingPart::QuantifiedCondition);
        }
        missing
    }

    pub fn accept<V: PredicateVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_quantification(self)
    }
}

#[derive(Debug, Clone)]
pub struct QuantificationBuilder {
    quantifier: Quantifier,
    variable: Option<Variable>,
    condition: Option<Predicate>,
}

impl QuantificationBuilder {
    pub fn variable(mut self, variable: Variable) -> Self {
        self.variable = Some(variable);
        self
    }

    pub fn condition(mut self, condition: Predicate) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn build(self) -> Quantification {
        Quantification {
            quantifier: self.quantifier,
            variable: self.variable,
            condition: self.condition.map(Box::new),
        }
    }

    pub fn try_build(self) -> ExprResult<Quantification> {
        let node = self.build();
        let missing = node.missing_parts();
        if missing.is_empty() {
            Ok(node)
        } else {
            Err(ExprError::incomplete(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::FunctionPredicate;
    use crate::sql::Expression;

    #[test]
    fn test_quantifier_text() {
        assert_eq!(Quantifier::ForAll.as_str(), "FORALL");
        assert_eq!(Quantifier::Exists.as_str(), "EXISTS");
    }

    #[test]
    fn test_builder() {
        let condition = Predicate::Function(FunctionPredicate::new(
            "isValid",
            vec![Expression::column("x")],
        ));
        let quant = Quantification::builder(Quantifier::Exists)
            .condition(condition.clone())
            .variable(Variable::new("x"))
            .try_build()
            .unwrap();

        assert_eq!(quant.quantifier(), Quantifier::Exists);
        assert_eq!(quant.variable().map(Variable::name), Some("x"));
        assert_eq!(quant.condition(), Some(&condition));
    }

    #[test]
    fn test_missing_condition() {
        let quant = Quantification::builder(Quantifier::ForAll)
            .variable(Variable::new("x"))
            .build();
        assert!(quant.condition().is_none());
        assert_eq!(quant.missing_parts(), vec![MissingPart::QuantifiedCondition]);

        let err = Quantification::builder(Quantifier::ForAll)
            .try_build()
            .unwrap_err();
        assert_eq!(
            err.missing_parts(),
            &[
                MissingPart::QuantifiedVariable,
                MissingPart::QuantifiedCondition
            ]
        );
    }
}
