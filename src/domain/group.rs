//! Study group domain entities.

use serde::{Deserialize, Serialize};

use super::{GroupId, UserId};

/// Lifecycle status of a study group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// Accepting new members.
    Active,
    /// At its member cap.
    Full,
    /// Cancelled by its creator; membership changes are rejected.
    Cancelled,
}

/// A study group the current user can browse, join, or leave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyGroup {
    /// Unique group identifier.
    pub id: GroupId,

    /// Display name of the group.
    pub name: String,

    /// Subject or topic the group meets about.
    pub subject: String,

    /// Free-form description.
    pub description: String,

    /// Owning department label.
    pub department: String,

    /// Meeting schedule as entered by the creator (free-form).
    pub schedule: String,

    /// Meeting location.
    pub location: String,

    /// Maximum number of members.
    pub member_limit: u32,

    /// Current member count.
    pub member_count: u32,

    /// Lifecycle status.
    pub status: GroupStatus,

    /// User who created the group.
    pub creator: UserId,

    /// Ids of current members.
    pub members: Vec<UserId>,
}

impl StudyGroup {
    /// Returns `true` if the current user could join this group:
    /// it is active and below its member cap.
    #[must_use]
    pub fn is_joinable(&self) -> bool {
        matches!(self.status, GroupStatus::Active) && self.member_count < self.member_limit
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_group(status: GroupStatus, count: u32, limit: u32) -> StudyGroup {
        StudyGroup {
            id: GroupId::from("g1"),
            name: "Algorithms".to_string(),
            subject: "CS".to_string(),
            description: String::new(),
            department: "Computing".to_string(),
            schedule: String::new(),
            location: String::new(),
            member_limit: limit,
            member_count: count,
            status,
            creator: UserId::from("u0"),
            members: Vec::new(),
        }
    }

    #[test]
    fn active_group_below_cap_is_joinable() {
        assert!(make_group(GroupStatus::Active, 3, 5).is_joinable());
    }

    #[test]
    fn full_or_cancelled_groups_are_not_joinable() {
        assert!(!make_group(GroupStatus::Active, 5, 5).is_joinable());
        assert!(!make_group(GroupStatus::Full, 3, 5).is_joinable());
        assert!(!make_group(GroupStatus::Cancelled, 0, 5).is_joinable());
    }

    #[test]
    fn status_decodes_from_lowercase_wire_values() {
        let Some(status) = serde_json::from_str::<GroupStatus>("\"active\"").ok() else {
            panic!("status must decode");
        };
        assert_eq!(status, GroupStatus::Active);
    }
}
