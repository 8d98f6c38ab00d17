//! In-memory entity store.
//!
//! # Responsibility
//! - Hold the authoritative collection for every entity kind.
//! - Provide shared/exclusive access and diagnostic snapshots.
//!
//! # Invariants
//! - One lock guards all collections, so a write spanning two collections
//!   (student + address) is observed atomically.
//! - The store never validates identifiers or relationships.
//! - There is no reset; a store lives as long as its owner keeps it.

mod collection;

pub use collection::Collection;

use crate::model::course::Course;
use crate::model::entity::Entity;
use crate::model::exam::Exam;
use crate::model::student::{Address, Student};
use log::debug;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};

/// All entity collections, one per kind.
#[derive(Debug, Default)]
pub struct Collections {
    pub addresses: Collection<Address>,
    pub courses: Collection<Course>,
    pub exams: Collection<Exam>,
    pub students: Collection<Student>,
}

/// Maps an entity type to its collection inside `Collections`.
pub trait StoredEntity: Entity + Clone {
    fn collection(collections: &Collections) -> &Collection<Self>;
    fn collection_mut(collections: &mut Collections) -> &mut Collection<Self>;
}

macro_rules! stored_entity {
    ($ty:ty, $field:ident) => {
        impl StoredEntity for $ty {
            fn collection(collections: &Collections) -> &Collection<Self> {
                &collections.$field
            }

            fn collection_mut(collections: &mut Collections) -> &mut Collection<Self> {
                &mut collections.$field
            }
        }
    };
}

stored_entity!(Address, addresses);
stored_entity!(Course, courses);
stored_entity!(Exam, exams);
stored_entity!(Student, students);

/// Owned copy of every collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub addresses: Vec<Address>,
    pub courses: Vec<Course>,
    pub exams: Vec<Exam>,
    pub students: Vec<Student>,
}

/// Per-kind element counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub addresses: usize,
    pub courses: usize,
    pub exams: usize,
    pub students: usize,
}

/// Thread-safe holder of all live entities.
///
/// Repositories borrow the store; share it across threads with `Arc`.
#[derive(Debug, Default)]
pub struct EntityStore {
    collections: RwLock<Collections>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("event=store_init module=store status=ok");
        Self::default()
    }

    /// Acquires shared access to all collections.
    pub fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read()
    }

    /// Acquires exclusive access to all collections.
    ///
    /// Hold the guard for the whole logical operation; releasing it between
    /// two related mutations makes the intermediate state observable.
    pub fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write()
    }

    /// Copies every collection for diagnostic rendering.
    pub fn snapshot(&self) -> StoreSnapshot {
        let collections = self.read();
        StoreSnapshot {
            addresses: collections.addresses.to_vec(),
            courses: collections.courses.to_vec(),
            exams: collections.exams.to_vec(),
            students: collections.students.to_vec(),
        }
    }

    pub fn counts(&self) -> StoreCounts {
        let collections = self.read();
        StoreCounts {
            addresses: collections.addresses.len(),
            courses: collections.courses.len(),
            exams: collections.exams.len(),
            students: collections.students.len(),
        }
    }
}
