//! Student use-case service.
//!
//! # Responsibility
//! - Provide enrollment-oriented entry points for callers.
//! - Delegate every read and write to a `Repository<Student>`.
//!
//! # Invariants
//! - Service APIs never bypass repository identity or cascade rules.
//! - Service layer remains storage-agnostic.

use crate::model::entity::EntityId;
use crate::model::student::{Address, Student};
use crate::repo::{RepoResult, Repository};
use log::info;

/// Use-case service wrapper for student operations.
pub struct StudentService<R: Repository<Student>> {
    repo: R,
}

impl<R: Repository<Student>> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Enrolls a new student living at the given address.
    ///
    /// # Contract
    /// - Student and address identifiers are assigned by the repository.
    /// - Returns the new student identifier.
    pub fn enroll(
        &self,
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> RepoResult<EntityId> {
        let student = Student::new(name, Address::new(street, city));
        let id = self.repo.create(Some(student))?;
        info!("event=student_enroll module=service status=ok student_id={id}");
        Ok(id)
    }

    /// Changes a student's name and returns the stored result.
    ///
    /// The address is read back from the store, never from the caller, so a
    /// rename cannot alter it.
    pub fn rename(&self, id: EntityId, name: impl Into<String>) -> RepoResult<Student> {
        let current = self.repo.get_by_id(id)?;
        let changes = Student::with_id(id, name, current.address);
        self.repo.update(Some(changes))
    }

    /// Removes a student together with the address it owns.
    pub fn withdraw(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!("event=student_withdraw module=service status=ok student_id={id}");
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> RepoResult<Student> {
        self.repo.get_by_id(id)
    }

    /// Lists all students in enrollment order.
    pub fn list(&self) -> Vec<Student> {
        self.repo.list_all()
    }
}
