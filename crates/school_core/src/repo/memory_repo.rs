//! Generic in-memory repository for independent entity kinds.
//!
//! # Responsibility
//! - Implement `Repository<T>` for kinds without owned dependents
//!   (courses, exams).
//!
//! # Invariants
//! - Only kinds implementing `Updatable` can be managed here. `Address` does
//!   not, so addresses can only be created and removed through the student
//!   repository.
//! - `update` copies the kind's whitelisted fields and nothing else.

use super::{fresh_id, locate, trace_outcome, RepoError, RepoResult, Repository};
use crate::model::course::Course;
use crate::model::entity::{Entity, EntityId};
use crate::model::exam::Exam;
use crate::store::{EntityStore, StoredEntity};
use std::marker::PhantomData;

/// Whitelist of fields `update` may copy onto a stored entity.
pub trait Updatable: StoredEntity {
    /// Copies mutable fields from `changes` onto `self`. Must not touch `id`.
    fn apply_update(&mut self, changes: Self);
}

impl Updatable for Course {
    fn apply_update(&mut self, changes: Self) {
        self.name = changes.name;
        self.description = changes.description;
    }
}

impl Updatable for Exam {
    fn apply_update(&mut self, changes: Self) {
        self.title = changes.title;
        self.scheduled_at = changes.scheduled_at;
    }
}

/// Store-backed repository for one independent entity kind.
pub struct InMemoryRepository<'store, T> {
    store: &'store EntityStore,
    _kind: PhantomData<fn() -> T>,
}

pub type CourseRepository<'store> = InMemoryRepository<'store, Course>;
pub type ExamRepository<'store> = InMemoryRepository<'store, Exam>;

impl<'store, T: Updatable> InMemoryRepository<'store, T> {
    pub fn new(store: &'store EntityStore) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    fn insert(&self, mut entity: T) -> RepoResult<EntityId> {
        let mut collections = self.store.write();
        let collection = T::collection_mut(&mut collections);
        let id = fresh_id(collection)?;
        entity.set_id(id);
        collection.push(entity);
        Ok(id)
    }

    fn find(&self, id: EntityId) -> RepoResult<T> {
        let collections = self.store.read();
        let collection = T::collection(&collections);
        let index = locate(collection, id)?;
        collection
            .get(index)
            .cloned()
            .ok_or(RepoError::NotFound { kind: T::KIND, id })
    }

    fn modify(&self, changes: T) -> RepoResult<T> {
        let id = changes.id();
        let mut collections = self.store.write();
        let collection = T::collection_mut(&mut collections);
        let index = locate(collection, id)?;
        let stored = collection
            .get_mut(index)
            .ok_or(RepoError::NotFound { kind: T::KIND, id })?;
        stored.apply_update(changes);
        Ok(stored.clone())
    }

    fn remove(&self, id: EntityId) -> RepoResult<()> {
        let mut collections = self.store.write();
        let collection = T::collection_mut(&mut collections);
        let index = locate(collection, id)?;
        collection.remove(index);
        Ok(())
    }
}

impl<T: Updatable> Repository<T> for InMemoryRepository<'_, T> {
    fn create(&self, entity: Option<T>) -> RepoResult<EntityId> {
        let result = entity
            .ok_or(RepoError::InvalidArgument("entity"))
            .and_then(|entity| self.insert(entity));
        trace_outcome("entity_create", T::KIND, result)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<T> {
        trace_outcome("entity_get", T::KIND, self.find(id))
    }

    fn update(&self, entity: Option<T>) -> RepoResult<T> {
        let result = entity
            .ok_or(RepoError::InvalidArgument("entity"))
            .and_then(|changes| self.modify(changes));
        trace_outcome("entity_update", T::KIND, result)
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        trace_outcome("entity_delete", T::KIND, self.remove(id))
    }

    fn list_all(&self) -> Vec<T> {
        T::collection(&self.store.read()).to_vec()
    }
}
