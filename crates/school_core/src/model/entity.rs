//! Entity identity contract.
//!
//! # Responsibility
//! - Give every record kind a stable identifier and a kind tag.
//!
//! # Invariants
//! - An identifier, once assigned by a repository, never changes.
//! - `Uuid::nil()` marks a value that has not been stored yet.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier assigned to every stored entity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Tag for the collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Address,
    Course,
    Exam,
    Student,
}

impl EntityKind {
    /// Stable lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Course => "course",
            Self::Exam => "exam",
            Self::Student => "student",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record with an identity that survives state changes.
pub trait Entity {
    /// Collection this entity kind lives in.
    const KIND: EntityKind;

    /// Returns the current identifier.
    fn id(&self) -> EntityId;

    /// Overwrites the identifier. Only repositories call this, on create.
    fn set_id(&mut self, id: EntityId);
}
