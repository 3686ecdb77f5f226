//! Rendering configuration.

/// Spelling used for the SQL inequality operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotEqualStyle {
    /// ISO SQL `<>`.
    #[default]
    Standard,
    /// `!=`, accepted by most dialects.
    Bang,
}

impl NotEqualStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotEqualStyle::Standard => "<>",
            NotEqualStyle::Bang => "!=",
        }
    }
}

/// Options controlling how trees are rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Schema owning the spatial metadata constructors
    /// (`SDO_DIM_ARRAY`, `SDO_DIM_ELEMENT`). `None` renders them unqualified.
    pub sdo_schema: Option<String>,
    /// Inequality operator spelling.
    pub not_equal: NotEqualStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sdo_schema: Some("MDSYS".to_string()),
            not_equal: NotEqualStyle::Standard,
        }
    }
}

impl RenderConfig {
    pub fn with_sdo_schema(mut self, schema: Option<impl Into<String>>) -> Self {
        self.sdo_schema = schema.map(Into::into);
        self
    }

    pub fn with_not_equal(mut self, style: NotEqualStyle) -> Self {
        self.not_equal = style;
        self
    }

    /// Qualify a spatial constructor name with the configured schema.
    pub(crate) fn sdo_constructor(&self, name: &str) -> String {
        match &self.sdo_schema {
            Some(schema) => format!("{}.{}", schema, name),
            None => name.to_string(),
        }
    }
}
