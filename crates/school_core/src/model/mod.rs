//! Domain model for the school data-access layer.
//!
//! # Responsibility
//! - Define the entity records stored by `EntityStore`.
//! - Provide the identity contract (`Entity`) shared by every repository.
//!
//! # Invariants
//! - Every stored entity is identified by an `EntityId` assigned on create.
//! - A `Student` owns exactly one `Address`; addresses are never shared.

pub mod course;
pub mod entity;
pub mod exam;
pub mod student;
