//! Exam record.

use super::entity::{Entity, EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Exam sitting. Independent of courses and students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: EntityId,
    pub title: String,
    /// Unix epoch milliseconds. `None` until a date is fixed.
    pub scheduled_at: Option<i64>,
}

impl Exam {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::nil(), title)
    }

    pub fn with_id(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            scheduled_at: None,
        }
    }
}

impl Entity for Exam {
    const KIND: EntityKind = EntityKind::Exam;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Display for Exam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.scheduled_at {
            Some(at) => write!(
                f,
                "Exam {{ id: {}, title: {}, scheduled_at: {at} }}",
                self.id, self.title
            ),
            None => write!(f, "Exam {{ id: {}, title: {} }}", self.id, self.title),
        }
    }
}
