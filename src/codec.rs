//! Binary snapshots of expression and predicate trees.
//!
//! A snapshot is a version tag followed by a list of trees, encoded with
//! bincode. The version is checked before the items are decoded, and
//! nesting is capped while decoding so a crafted file cannot exhaust the
//! stack.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use log::debug;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{ExprError, ExprResult};
use crate::fol::Predicate;
use crate::render::Rendering;
use crate::sql::Expression;
use crate::validate::{validate_expression, validate_predicate};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Deepest chain of nested child nodes accepted by [`Snapshot::decode`].
pub const MAX_NESTING_DEPTH: usize = 128;

thread_local! {
    static NESTING: Cell<usize> = Cell::new(0);
}

struct NestingGuard;

impl NestingGuard {
    fn enter() -> Option<Self> {
        NESTING.with(|depth| {
            if depth.get() >= MAX_NESTING_DEPTH {
                None
            } else {
                depth.set(depth.get() + 1);
                Some(NestingGuard)
            }
        })
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Field deserializer for child nodes; fails past [`MAX_NESTING_DEPTH`].
pub(crate) fn deserialize_nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let _guard = match NestingGuard::enter() {
        Some(guard) => guard,
        None => {
            return Err(de::Error::custom(format!(
                "tree nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )))
        }
    };
    T::deserialize(deserializer)
}

/// One tree stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SnapshotItem {
    Expression(Expression),
    Predicate(Predicate),
}

impl SnapshotItem {
    pub fn kind(&self) -> &'static str {
        match self {
            SnapshotItem::Expression(_) => "expression",
            SnapshotItem::Predicate(_) => "predicate",
        }
    }

    pub fn render_with(&self, config: &RenderConfig) -> Rendering {
        match self {
            SnapshotItem::Expression(expr) => expr.render_with(config),
            SnapshotItem::Predicate(pred) => pred.render_with(config),
        }
    }

    pub fn validate(&self) -> ExprResult<()> {
        match self {
            SnapshotItem::Expression(expr) => validate_expression(expr),
            SnapshotItem::Predicate(pred) => validate_predicate(pred),
        }
    }
}

impl From<Expression> for SnapshotItem {
    fn from(expr: Expression) -> Self {
        SnapshotItem::Expression(expr)
    }
}

impl From<Predicate> for SnapshotItem {
    fn from(pred: Predicate) -> Self {
        SnapshotItem::Predicate(pred)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    version: u32,
    items: Vec<SnapshotItem>,
}

impl Snapshot {
    pub fn new(items: Vec<SnapshotItem>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn items(&self) -> &[SnapshotItem] {
        &self.items
    }

    pub fn encode(&self) -> ExprResult<Vec<u8>> {
        if self.items.is_empty() {
            return Err(ExprError::EmptySnapshot);
        }
        let bytes = bincode::serialize(self)?;
        debug!(
            "encoded snapshot v{} with {} items ({} bytes)",
            self.version,
            self.items.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> ExprResult<Self> {
        let version: u32 = bincode::deserialize(bytes)?;
        if version != SNAPSHOT_VERSION {
            return Err(ExprError::UnsupportedSnapshotVersion {
                found: version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        if snapshot.items.is_empty() {
            return Err(ExprError::EmptySnapshot);
        }
        debug!("decoded snapshot with {} items", snapshot.items.len());
        Ok(snapshot)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> ExprResult<()> {
        let bytes = self.encode()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> ExprResult<Self> {
        let bytes = fs::read(path)?;
        Self::decode(&bytes)
    }
}
