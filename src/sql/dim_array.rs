//! Oracle Spatial dimension metadata constructors.
//!
//! `SDO_DIM_ARRAY` carries the per-dimension bounds and tolerance of a
//! geometry column, one `SDO_DIM_ELEMENT` per ordinate. The element order is
//! the ordinate order (X, Y, Z, ...), so it is kept exactly as supplied.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{ExprError, ExprResult};
use crate::render::MissingPart;
use crate::sql::expr::quote;
use crate::sql::visitor::ExpressionVisitor;

/// One `SDO_DIM_ELEMENT(name, lower, upper, tolerance)` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimElement {
    name: String,
    lower_bound: f64,
    upper_bound: f64,
    tolerance: f64,
}

impl DimElement {
    pub fn new(name: impl Into<String>, lower_bound: f64, upper_bound: f64, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            lower_bound,
            upper_bound,
            tolerance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.lower_bound.is_finite() && self.upper_bound.is_finite() && self.tolerance.is_finite()
    }

    pub fn to_sql(&self, config: &RenderConfig) -> String {
        format!(
            "{}({}, {}, {}, {})",
            config.sdo_constructor("SDO_DIM_ELEMENT"),
            quote(&self.name),
            self.lower_bound,
            self.upper_bound,
            self.tolerance
        )
    }
}

/// `SDO_DIM_ARRAY(element, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdoDimArrayExpression {
    elements: Vec<DimElement>,
}

impl SdoDimArrayExpression {
    /// Strict constructor: an array needs at least one element.
    pub fn try_new(elements: Vec<DimElement>) -> ExprResult<Self> {
        Self::builder().elements(elements).try_build()
    }

    pub fn builder() -> SdoDimArrayExpressionBuilder {
        SdoDimArrayExpressionBuilder::default()
    }

    pub fn elements(&self) -> &[DimElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_sdo_dim_array(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SdoDimArrayExpressionBuilder {
    elements: Vec<DimElement>,
}

impl SdoDimArrayExpressionBuilder {
    /// Append one element after those already added.
    pub fn element(mut self, element: DimElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn elements(mut self, elements: impl IntoIterator<Item = DimElement>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Freeze the array, empty or not.
    pub fn build(self) -> SdoDimArrayExpression {
        SdoDimArrayExpression {
            elements: self.elements,
        }
    }

    /// Like [`build`](Self::build), but rejects an empty array and elements
    /// with `inf` / `NaN` bounds or tolerance.
    pub fn try_build(self) -> ExprResult<SdoDimArrayExpression> {
        if self.elements.is_empty() {
            return Err(ExprError::incomplete(vec![MissingPart::DimArrayElements]));
        }
        let non_finite: Vec<MissingPart> = self
            .elements
            .iter()
            .filter(|e| !e.is_finite())
            .map(|_| MissingPart::FiniteNumber)
            .collect();
        if !non_finite.is_empty() {
            return Err(ExprError::incomplete(non_finite));
        }
        Ok(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_element_sql() {
        let config = RenderConfig::default();
        let x = DimElement::new("X", -180.0, 180.0, 0.05);
        assert_eq!(
            x.to_sql(&config),
            "MDSYS.SDO_DIM_ELEMENT('X', -180, 180, 0.05)"
        );

        let config = RenderConfig::default().with_sdo_schema(None::<String>);
        assert_eq!(x.to_sql(&config), "SDO_DIM_ELEMENT('X', -180, 180, 0.05)");
    }

    #[test]
    fn test_builder_preserves_order() {
        let array = SdoDimArrayExpression::builder()
            .element(DimElement::new("X", 0.0, 10.0, 0.5))
            .elements(vec![
                DimElement::new("Y", 0.0, 20.0, 0.5),
                DimElement::new("Z", 0.0, 30.0, 0.5),
            ])
            .build();

        let names: Vec<&str> = array.elements().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_empty_array() {
        let array = SdoDimArrayExpression::builder().build();
        assert!(array.is_empty());

        let err = SdoDimArrayExpression::try_new(vec![]).unwrap_err();
        assert_eq!(err.missing_parts(), &[MissingPart::DimArrayElements]);
    }

    #[test]
    fn test_non_finite_elements_are_rejected() {
        assert!(DimElement::new("X", -180.0, 180.0, 0.05).is_finite());
        assert!(!DimElement::new("X", f64::NEG_INFINITY, 180.0, 0.05).is_finite());
        assert!(!DimElement::new("X", -180.0, 180.0, f64::NAN).is_finite());

        let err = SdoDimArrayExpression::try_new(vec![
            DimElement::new("X", -180.0, 180.0, 0.05),
            DimElement::new("Y", -90.0, f64::INFINITY, 0.05),
        ])
        .unwrap_err();
        assert_eq!(err.missing_parts(), &[MissingPart::FiniteNumber]);

        // Lenient path still builds it
        let array = SdoDimArrayExpression::builder()
            .element(DimElement::new("Y", -90.0, f64::INFINITY, 0.05))
            .build();
        assert_eq!(array.elements().len(), 1);
    }
}
