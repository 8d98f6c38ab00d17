//! Student and owned address records.
//!
//! # Responsibility
//! - Define the `Student -> Address` ownership pair.
//!
//! # Invariants
//! - One student has exactly one address, one address belongs to exactly one
//!   student.
//! - The address embedded in a student equals the canonical copy in the
//!   address collection. Addresses are immutable after creation, so the two
//!   copies never diverge.
//! - Only the student repository inserts or removes addresses.

use super::entity::{Entity, EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Postal address owned by a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: EntityId,
    pub street: String,
    pub city: String,
}

impl Address {
    /// Creates an address that has not been stored yet.
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self::with_id(Uuid::nil(), street, city)
    }

    /// Creates an address with a caller-provided identifier.
    pub fn with_id(id: EntityId, street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id,
            street: street.into(),
            city: city.into(),
        }
    }
}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Address {{ id: {}, street: {}, city: {} }}",
            self.id, self.street, self.city
        )
    }
}

/// Student record. Carries its owned address by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    /// The only field `update` is allowed to change.
    pub name: String,
    pub address: Address,
}

impl Student {
    /// Creates a student that has not been stored yet.
    ///
    /// Both the student and the address identifiers are assigned by the
    /// repository on create.
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self::with_id(Uuid::nil(), name, address)
    }

    /// Creates a student with a caller-provided identifier.
    ///
    /// Used by update requests, which locate the stored student by `id`.
    pub fn with_id(id: EntityId, name: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            address,
        }
    }
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student {{ id: {}, name: {}, address: {} }}",
            self.id, self.name, self.address
        )
    }
}
