//! Type-safe identifiers for backend entities.
//!
//! The backend treats identities as opaque values: events carry numeric
//! ids, users and study groups carry string ids. Newtype wrappers keep
//! the three spaces from being confused with each other.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an event.
///
/// Wraps the backend's numeric event id. Used for participation-history
/// membership tests and as the path segment of event endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Creates an `EventId` from a raw backend id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EventId> for i64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// Unique identifier for a user.
///
/// Opaque string assigned by the backend. Participant lists, connection
/// records, and event creators all reference users through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from a raw backend id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a study group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a `GroupId` from a raw backend id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn event_id_display_is_raw_number() {
        let id = EventId::new(42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn event_id_serde_is_transparent() {
        let json = serde_json::to_string(&EventId::new(7)).ok();
        assert_eq!(json.as_deref(), Some("7"));

        let Some(id) = serde_json::from_str::<EventId>("7").ok() else {
            panic!("deserialization failed");
        };
        assert_eq!(id, EventId::new(7));
    }

    #[test]
    fn user_id_round_trips_through_string() {
        let id = UserId::from("u-123");
        assert_eq!(id.as_str(), "u-123");
        assert_eq!(format!("{id}"), "u-123");
    }

    #[test]
    fn user_id_hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = UserId::from("u1");
        let mut map = HashMap::new();
        map.insert(id.clone(), "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn group_id_equality_is_by_value() {
        assert_eq!(GroupId::from("g1"), GroupId::new("g1"));
        assert_ne!(GroupId::from("g1"), GroupId::from("g2"));
    }
}
