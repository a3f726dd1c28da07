//! Error type shared by root systems, group elements and iterators.
//!
//! All checks run before any state is touched, so a returned error never
//! leaves a half-mutated word or weight behind.

use std::fmt;

/// Errors surfaced by the Weyl group core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeylError {
    /// Generator index outside `1..=rank`.
    InvalidGenerator { index: usize, rank: usize },
    /// Operands belong to different Weyl groups or root systems.
    MismatchedParent,
    /// Order-type query on a group that is not finite.
    InfiniteOrder,
    /// Request is well-formed but not implemented for this shape.
    Unsupported { reason: String },
    /// Matrix is not a generalized Cartan matrix.
    InvalidCartanMatrix { reason: String },
    /// Coordinate vector has the wrong length for the root system.
    DimensionMismatch { expected: usize, found: usize },
    /// Orbit walker seeds must be dominant.
    NotDominant,
    /// Cartan label could not be parsed (e.g. `"A0"`, `"Q3"`).
    UnknownCartanType { label: String },
}

impl WeylError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_cartan(reason: impl Into<String>) -> Self {
        Self::InvalidCartanMatrix {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WeylError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGenerator { index, rank } => {
                write!(f, "invalid generator {index} (expected 1..={rank})")
            }
            Self::MismatchedParent => {
                write!(f, "operands belong to different Weyl groups or root systems")
            }
            Self::InfiniteOrder => write!(f, "Weyl group is not finite"),
            Self::Unsupported { reason } => write!(f, "not implemented: {reason}"),
            Self::InvalidCartanMatrix { reason } => {
                write!(f, "invalid generalized Cartan matrix: {reason}")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "coordinate vector has length {found}, root system has rank {expected}"
            ),
            Self::NotDominant => write!(f, "weight is not dominant"),
            Self::UnknownCartanType { label } => write!(f, "unknown Cartan type {label:?}"),
        }
    }
}

impl std::error::Error for WeylError {}
