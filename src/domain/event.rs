//! Event and connection domain entities.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{EventId, UserId};

/// A scheduled campus event with its participant roster.
///
/// Decoded from the backend's event representation. The participant
/// list holds user ids only; display data for participants the caller
/// is connected to comes from cross-referencing [`Connection`] records
/// (see [`super::overlap::annotate`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Unique event identifier (immutable).
    pub id: EventId,

    /// Display name of the event.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Scheduled date and time.
    pub starts_at: DateTime<Utc>,

    /// Owning course or category label.
    pub course: String,

    /// Venue or meeting point. Empty when the organizer left it blank.
    pub location: String,

    /// Additional organizer notes.
    pub notes: String,

    /// Maximum number of participants. `None` means unbounded.
    pub participant_limit: Option<u32>,

    /// Current participant count as reported by the backend.
    ///
    /// The backend maintains this independently of `participants`,
    /// which may be paginated or lag behind.
    pub participant_count: u32,

    /// User who created the event.
    pub creator: UserId,

    /// Ids of registered participants. Empty when the backend omits
    /// the roster.
    pub participants: Vec<UserId>,
}

impl Event {
    /// Returns `true` if the event has reached its participant cap.
    ///
    /// Unbounded events are never full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.participant_limit
            .is_some_and(|limit| self.participant_count >= limit)
    }
}

/// An acquaintance link between the current user and another user.
///
/// Read-only lookup data for the feed: the resolver only tests
/// membership by `user_id` and reads `display_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// The connected user's id.
    pub user_id: UserId,

    /// The connected user's display name. The backend can return
    /// partial records; a missing name makes the feed fall back to
    /// the raw id.
    pub display_name: Option<String>,

    /// The connected user's course label.
    pub course: String,

    /// The connected user's semester number.
    pub semester: Option<u32>,
}
