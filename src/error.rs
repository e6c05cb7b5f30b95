//! Error types for the menu framework.
//!
//! Construction problems fail fast: a button is never handed out in a
//! usable-but-broken state. Guard rejections and scheduler refusals are
//! normal control-flow outcomes and deliberately have no variant here.

use thiserror::Error;

/// Crate-wide result alias.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors produced by the menu framework.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A required collaborator was missing when a button was built.
    #[error("button construction incomplete: missing {field}")]
    Construction {
        /// Name of the missing builder field.
        field: &'static str,
    },

    /// A slot index was outside the grid.
    #[error("slot {index} is out of bounds for a grid with {capacity} slots")]
    SlotOutOfBounds { index: usize, capacity: usize },
}
