//! Error types for building shapes by name.
//!
//! Shape arithmetic is total and never fails. The only fallible operations are
//! resolving a [`ShapeKind`] from its name and building a [`Figure`] from
//! positional dimensions, both of which report a [`ShapeError`].
//!
//! [`Figure`]: crate::Figure

use thiserror::Error;

use crate::ShapeKind;

/// The error type for building shapes from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error(
        "unknown shape kind `{name}`, valid values: rectangle, square, triangle, circle, semi_circle"
    )]
    UnknownKind { name: String },

    #[error("{kind} takes {expected} dimension(s), got {found}")]
    DimensionCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
}

impl ShapeError {
    /// Create a new `UnknownKind` error for the given name.
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind { name: name.into() }
    }
}
