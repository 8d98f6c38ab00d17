//! Repository layer: the uniform data-access contract and its in-memory
//! implementations.
//!
//! # Responsibility
//! - Define `Repository<T>` (create, get_by_id, update, delete, list_all).
//! - Own identifier allocation and single-match lookup semantics.
//! - Keep the student -> address cascade inside the student repository.
//!
//! # Invariants
//! - Every mutation runs under one store write lock.
//! - Lookups surface `NotFound`/`AmbiguousMatch` instead of defaulting.
//! - Identifiers are unique per collection at insertion time.

pub mod error;
pub mod memory_repo;
pub mod student_repo;

pub use error::{RepoError, RepoResult};

use crate::model::entity::{Entity, EntityId, EntityKind};
use crate::store::Collection;
use log::{debug, warn};
use uuid::Uuid;

/// Uniform CRUD contract implemented once per entity kind.
pub trait Repository<T> {
    /// Stores `entity` under a freshly generated identifier and returns it.
    ///
    /// Any identifier already set on `entity` is overwritten. `None` is
    /// rejected with `RepoError::InvalidArgument`.
    fn create(&self, entity: Option<T>) -> RepoResult<EntityId>;

    /// Returns a copy of the single entity carrying `id`.
    fn get_by_id(&self, id: EntityId) -> RepoResult<T>;

    /// Applies the kind's mutable fields from `entity` onto the stored entity
    /// with the same identifier and returns a copy of the stored result.
    fn update(&self, entity: Option<T>) -> RepoResult<T>;

    /// Removes the entity carrying `id`, together with anything it owns.
    fn delete(&self, id: EntityId) -> RepoResult<()>;

    /// Returns copies of every entity of this kind in insertion order.
    fn list_all(&self) -> Vec<T>;
}

/// Resolves `id` to the position of its only match.
pub(crate) fn locate<T: Entity>(collection: &Collection<T>, id: EntityId) -> RepoResult<usize> {
    match collection.positions(id).as_slice() {
        [index] => Ok(*index),
        [] => Err(RepoError::NotFound { kind: T::KIND, id }),
        matches => Err(RepoError::AmbiguousMatch {
            kind: T::KIND,
            id,
            count: matches.len(),
        }),
    }
}

/// Generates an identifier not yet used in `collection`.
pub(crate) fn fresh_id<T: Entity>(collection: &Collection<T>) -> RepoResult<EntityId> {
    let id = Uuid::new_v4();
    if collection.contains(id) {
        return Err(RepoError::DuplicateId { kind: T::KIND, id });
    }
    Ok(id)
}

/// Emits the outcome event for one repository call and passes `result` on.
pub(crate) fn trace_outcome<V>(
    event: &str,
    kind: EntityKind,
    result: RepoResult<V>,
) -> RepoResult<V> {
    match &result {
        Ok(_) => debug!("event={event} module=repo kind={kind} status=ok"),
        Err(err) => warn!(
            "event={event} module=repo kind={kind} status=error error_code={} error={err}",
            err.code()
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{fresh_id, locate, RepoError};
    use crate::model::entity::EntityKind;
    use crate::model::exam::Exam;
    use crate::store::Collection;
    use uuid::Uuid;

    #[test]
    fn locate_distinguishes_missing_single_and_ambiguous() {
        let id = Uuid::from_u128(1);
        let mut exams = Collection::new();

        assert!(matches!(
            locate(&exams, id),
            Err(RepoError::NotFound { kind: EntityKind::Exam, .. })
        ));

        exams.push(Exam::with_id(Uuid::from_u128(9), "other"));
        exams.push(Exam::with_id(id, "midterm"));
        assert_eq!(locate(&exams, id).unwrap(), 1);

        exams.push(Exam::with_id(id, "copy"));
        assert!(matches!(
            locate(&exams, id),
            Err(RepoError::AmbiguousMatch { count: 2, .. })
        ));
    }

    #[test]
    fn fresh_id_is_not_nil_and_unused() {
        let exams: Collection<Exam> = Collection::new();
        let id = fresh_id(&exams).unwrap();
        assert!(!id.is_nil());
        assert!(!exams.contains(id));
    }
}
