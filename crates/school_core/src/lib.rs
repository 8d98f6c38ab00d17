//! Core data-access layer for the school domain.
//! This crate owns the entity model, the in-memory store and the repository
//! contract, including the student -> address cascade.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::Course;
pub use model::entity::{Entity, EntityId, EntityKind};
pub use model::exam::Exam;
pub use model::student::{Address, Student};
pub use repo::memory_repo::{CourseRepository, ExamRepository, InMemoryRepository, Updatable};
pub use repo::student_repo::InMemoryStudentRepository;
pub use repo::{RepoError, RepoResult, Repository};
pub use service::student_service::StudentService;
pub use store::{Collection, Collections, EntityStore, StoreCounts, StoreSnapshot, StoredEntity};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
