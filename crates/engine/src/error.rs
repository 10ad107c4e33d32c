//! Line-level simulation errors. None of these are retried.

use stack_core::{Placement, UnknownShape};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Token identifier is not in the shape catalog.
    #[error("unknown shape identifier '{0}'")]
    UnknownShape(char),

    /// Line bytes are not UTF-8; `valid_up_to` is the length of the valid prefix.
    #[error("line is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    /// Token is empty, has no offset, or the offset is not base-10.
    #[error("malformed token '{0}'")]
    MalformedToken(String),

    /// Bounding box leaves `0..width`. Checked before any drop search.
    #[error("{placement} out of bounds: shape spans past grid width {width}")]
    OutOfBounds { placement: Placement, width: usize },

    /// Resting position would reach past the top allocated row.
    #[error("{placement} overflows grid: resting row {y} leaves no room below height {height}")]
    GridOverflow {
        placement: Placement,
        y: i32,
        height: usize,
    },
}

impl From<UnknownShape> for SimError {
    fn from(e: UnknownShape) -> Self {
        SimError::UnknownShape(e.0)
    }
}
