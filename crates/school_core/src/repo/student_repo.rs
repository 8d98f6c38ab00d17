//! Student repository with address cascade.
//!
//! # Responsibility
//! - Implement `Repository<Student>` over the shared store.
//! - Own the address lifecycle: addresses are inserted and removed only here.
//!
//! # Invariants
//! - Create assigns both identifiers and inserts the address before the
//!   student, under one write lock.
//! - Update changes `name` only; the stored address is never touched.
//! - Delete removes the owned address, then the student, under one write
//!   lock. A failed lookup leaves both collections unchanged.

use super::{fresh_id, locate, trace_outcome, RepoError, RepoResult, Repository};
use crate::model::entity::{EntityId, EntityKind};
use crate::model::student::{Address, Student};
use crate::store::EntityStore;
use log::{debug, warn};

/// Store-backed student repository.
pub struct InMemoryStudentRepository<'store> {
    store: &'store EntityStore,
}

impl<'store> InMemoryStudentRepository<'store> {
    pub fn new(store: &'store EntityStore) -> Self {
        Self { store }
    }

    /// Returns a copy of the address carrying `id`.
    ///
    /// Read-only: addresses cannot be changed or removed on their own.
    pub fn get_address(&self, id: EntityId) -> RepoResult<Address> {
        let result = {
            let collections = self.store.read();
            locate(&collections.addresses, id).and_then(|index| {
                collections
                    .addresses
                    .get(index)
                    .cloned()
                    .ok_or(RepoError::NotFound {
                        kind: EntityKind::Address,
                        id,
                    })
            })
        };
        trace_outcome("address_get", EntityKind::Address, result)
    }

    fn insert(&self, mut student: Student) -> RepoResult<EntityId> {
        let mut collections = self.store.write();
        let student_id = fresh_id(&collections.students)?;
        let address_id = fresh_id(&collections.addresses)?;

        student.id = student_id;
        student.address.id = address_id;

        collections.addresses.push(student.address.clone());
        collections.students.push(student);

        debug!(
            "event=student_insert module=repo status=ok student_id={student_id} address_id={address_id}"
        );
        Ok(student_id)
    }

    fn find(&self, id: EntityId) -> RepoResult<Student> {
        let collections = self.store.read();
        let index = locate(&collections.students, id)?;
        collections
            .students
            .get(index)
            .cloned()
            .ok_or(RepoError::NotFound {
                kind: EntityKind::Student,
                id,
            })
    }

    fn rename(&self, changes: Student) -> RepoResult<Student> {
        let id = changes.id;
        let mut collections = self.store.write();
        let index = locate(&collections.students, id)?;
        let stored = collections
            .students
            .get_mut(index)
            .ok_or(RepoError::NotFound {
                kind: EntityKind::Student,
                id,
            })?;
        stored.name = changes.name;
        Ok(stored.clone())
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        let mut collections = self.store.write();
        let student_index = locate(&collections.students, id)?;
        let address_id = collections
            .students
            .get(student_index)
            .map(|student| student.address.id)
            .ok_or(RepoError::NotFound {
                kind: EntityKind::Student,
                id,
            })?;

        // Resolve the address before mutating anything.
        let address_index = match locate(&collections.addresses, address_id) {
            Ok(index) => Some(index),
            Err(RepoError::NotFound { .. }) => {
                warn!(
                    "event=student_delete module=repo status=degraded student_id={id} address_id={address_id} error_code=address_missing"
                );
                None
            }
            Err(err) => return Err(err),
        };

        if let Some(index) = address_index {
            collections.addresses.remove(index);
        }
        collections.students.remove(student_index);

        debug!(
            "event=student_remove module=repo status=ok student_id={id} address_id={address_id}"
        );
        Ok(())
    }
}

impl Repository<Student> for InMemoryStudentRepository<'_> {
    fn create(&self, entity: Option<Student>) -> RepoResult<EntityId> {
        let result = entity
            .ok_or(RepoError::InvalidArgument("entity"))
            .and_then(|student| self.insert(student));
        trace_outcome("student_create", EntityKind::Student, result)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Student> {
        trace_outcome("student_get", EntityKind::Student, self.find(id))
    }

    fn update(&self, entity: Option<Student>) -> RepoResult<Student> {
        let result = entity
            .ok_or(RepoError::InvalidArgument("entity"))
            .and_then(|changes| self.rename(changes));
        trace_outcome("student_update", EntityKind::Student, result)
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        trace_outcome("student_delete", EntityKind::Student, self.remove(id))
    }

    fn list_all(&self) -> Vec<Student> {
        self.store.read().students.to_vec()
    }
}
