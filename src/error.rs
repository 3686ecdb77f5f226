//! Error types for building, validating and encoding expression trees.

use thiserror::Error;

use crate::render::MissingPart;

/// Errors produced by the strict construction, validation and codec paths.
///
/// Rendering itself never fails; it reports gaps through
/// [`Rendering::Incomplete`](crate::render::Rendering::Incomplete) instead.
#[derive(Error, Debug)]
pub enum ExprError {
    #[error("Incomplete tree: missing {}", describe(.missing))]
    Incomplete { missing: Vec<MissingPart> },

    #[error("Snapshot encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },

    #[error("Snapshot contains no items")]
    EmptySnapshot,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExprError {
    pub(crate) fn incomplete(missing: Vec<MissingPart>) -> Self {
        ExprError::Incomplete { missing }
    }

    /// Missing parts carried by an [`ExprError::Incomplete`], empty otherwise.
    pub fn missing_parts(&self) -> &[MissingPart] {
        match self {
            ExprError::Incomplete { missing } => missing,
            _ => &[],
        }
    }
}

fn describe(missing: &[MissingPart]) -> String {
    missing
        .iter()
        .map(|part| part.description())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for expression operations.
pub type ExprResult<T> = Result<T, ExprError>;
