//! Typed rendering results.

use std::fmt;

use crate::error::{ExprError, ExprResult};

/// A required part of a node that was never supplied, or was supplied in a
/// form SQL cannot spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingPart {
    BetweenTest,
    BetweenBegin,
    BetweenEnd,
    DimArrayElements,
    InListItems,
    QuantifiedVariable,
    QuantifiedCondition,
    ConnectiveOperands,
    /// `inf` / `NaN` in a numeric literal or dimension bound.
    FiniteNumber,
}

impl MissingPart {
    /// Diagnostic text rendered in place of the missing part.
    pub fn placeholder(&self) -> &'static str {
        match self {
            MissingPart::BetweenTest => "<test expression is null>",
            MissingPart::BetweenBegin => "<begin expression is null>",
            MissingPart::BetweenEnd => "<end expression is null>",
            MissingPart::DimArrayElements => "<elements are empty>",
            MissingPart::InListItems => "<list is empty>",
            MissingPart::QuantifiedVariable => "<variable is null>",
            MissingPart::QuantifiedCondition => "<condition is null>",
            MissingPart::ConnectiveOperands => "<operands are empty>",
            MissingPart::FiniteNumber => "<number is not finite>",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MissingPart::BetweenTest => "BETWEEN test expression",
            MissingPart::BetweenBegin => "BETWEEN lower bound",
            MissingPart::BetweenEnd => "BETWEEN upper bound",
            MissingPart::DimArrayElements => "SDO_DIM_ARRAY elements",
            MissingPart::InListItems => "IN list items",
            MissingPart::QuantifiedVariable => "quantified variable",
            MissingPart::QuantifiedCondition => "quantification condition",
            MissingPart::ConnectiveOperands => "connective operands",
            MissingPart::FiniteNumber => "finite numeric value",
        }
    }
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Text of a rendered tree.
///
/// An incomplete tree still yields text, with a placeholder for every gap,
/// so it can be logged. Only [`Rendering::into_complete`] is suitable for
/// text that will be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    Complete(String),
    Incomplete {
        text: String,
        missing: Vec<MissingPart>,
    },
}

impl Rendering {
    pub(crate) fn new(text: String, missing: Vec<MissingPart>) -> Self {
        if missing.is_empty() {
            Rendering::Complete(text)
        } else {
            Rendering::Incomplete { text, missing }
        }
    }

    /// Best-effort text, placeholders included.
    pub fn text(&self) -> &str {
        match self {
            Rendering::Complete(text) => text,
            Rendering::Incomplete { text, .. } => text,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Rendering::Complete(_))
    }

    pub fn missing(&self) -> &[MissingPart] {
        match self {
            Rendering::Complete(_) => &[],
            Rendering::Incomplete { missing, .. } => missing,
        }
    }

    /// The text of a complete tree, or the list of gaps.
    pub fn into_complete(self) -> ExprResult<String> {
        match self {
            Rendering::Complete(text) => Ok(text),
            Rendering::Incomplete { missing, .. } => Err(ExprError::incomplete(missing)),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Rendering::Complete(text) => text,
            Rendering::Incomplete { text, .. } => text,
        }
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_rendering() {
        let rendering = Rendering::new("a = 1".to_string(), vec![]);
        assert!(rendering.is_complete());
        assert!(rendering.missing().is_empty());
        assert_eq!(rendering.to_string(), "a = 1");
        assert_eq!(rendering.into_complete().unwrap(), "a = 1");
    }

    #[test]
    fn test_incomplete_rendering() {
        let rendering = Rendering::new(
            "FORALL (x | <condition is null>)".to_string(),
            vec![MissingPart::QuantifiedCondition],
        );
        assert!(!rendering.is_complete());
        assert_eq!(rendering.text(), "FORALL (x | <condition is null>)");
        assert_eq!(rendering.missing(), &[MissingPart::QuantifiedCondition]);

        let err = rendering.clone().into_complete().unwrap_err();
        assert!(matches!(err, ExprError::Incomplete { .. }));
        assert_eq!(rendering.into_text(), "FORALL (x | <condition is null>)");
    }

    #[test]
    fn test_placeholders_are_distinct() {
        let parts = [
            MissingPart::BetweenTest,
            MissingPart::BetweenBegin,
            MissingPart::BetweenEnd,
            MissingPart::DimArrayElements,
            MissingPart::InListItems,
            MissingPart::QuantifiedVariable,
            MissingPart::QuantifiedCondition,
            MissingPart::ConnectiveOperands,
            MissingPart::FiniteNumber,
        ];
        let mut placeholders: Vec<&str> = parts.iter().map(|p| p.placeholder()).collect();
        placeholders.sort_unstable();
        placeholders.dedup();
        assert_eq!(placeholders.len(), parts.len());
        assert!(placeholders.iter().all(|p| !p.contains("FIXME")));
    }
}
