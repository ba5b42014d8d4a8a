/**
 * Record Lifecycle
 *
 * Posts and comments are never removed from the database. Deleting one
 * stamps `deleted_at`, after which the record is invisible to every read
 * and every write. `RecordState` is the in-memory form of that column.
 *
 * `Deleted` is terminal. No statement clears `deleted_at`, and every write
 * filters on `deleted_at IS NULL`.
 */

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Visibility of a post or comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Visible and editable by its author
    Live,
    /// Tombstoned at the given time; terminal
    Deleted(DateTime<Utc>),
}

impl RecordState {
    pub fn is_live(&self) -> bool {
        matches!(self, RecordState::Live)
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            RecordState::Live => None,
            RecordState::Deleted(at) => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for RecordState {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        deleted_at.map_or(RecordState::Live, RecordState::Deleted)
    }
}

/// Serialized as the nullable `deleted_at` timestamp clients expect
impl Serialize for RecordState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.deleted_at().serialize(serializer)
    }
}
