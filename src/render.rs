//! Textual rendering of expression and predicate trees.
//!
//! Rendering never fails. Gaps in a tree are replaced by placeholder text
//! and listed in the returned [`Rendering`], so callers can tell a complete
//! tree from one that is only good for diagnostics.

pub mod renderer;
pub mod rendering;

use std::fmt;

pub use renderer::Renderer;
pub use rendering::{MissingPart, Rendering};

use crate::config::RenderConfig;
use crate::fol::Predicate;
use crate::sql::Expression;

impl Expression {
    pub fn render(&self) -> Rendering {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> Rendering {
        Renderer::render_expression(config, self)
    }
}

impl Predicate {
    pub fn render(&self) -> Rendering {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> Rendering {
        Renderer::render_predicate(config, self)
    }
}

/// Best-effort text with the default configuration, placeholders included.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().text())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().text())
    }
}
