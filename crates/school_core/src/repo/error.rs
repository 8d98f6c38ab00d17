//! Repository error taxonomy.

use crate::model::entity::{EntityId, EntityKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failures surfaced by every repository operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A create/update call received no entity. Carries the parameter name.
    InvalidArgument(&'static str),
    /// No record carries the identifier.
    NotFound { kind: EntityKind, id: EntityId },
    /// More than one record carries an identifier that must be unique.
    AmbiguousMatch {
        kind: EntityKind,
        id: EntityId,
        count: usize,
    },
    /// A freshly generated identifier already exists in the collection.
    DuplicateId { kind: EntityKind, id: EntityId },
}

impl RepoError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound { .. } => "not_found",
            Self::AmbiguousMatch { .. } => "ambiguous_match",
            Self::DuplicateId { .. } => "duplicate_id",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(name) => write!(f, "argument `{name}` must not be absent"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::AmbiguousMatch { kind, id, count } => {
                write!(f, "{count} {kind} records share identifier {id}")
            }
            Self::DuplicateId { kind, id } => {
                write!(f, "{kind} identifier already in use: {id}")
            }
        }
    }
}

impl Error for RepoError {}
