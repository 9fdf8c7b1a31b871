//! Study group DTOs.
//!
//! Unlike the event endpoints, the study-group endpoints use camelCase
//! English field names and return bare JSON arrays.

use serde::Deserialize;

use crate::domain::{GroupId, GroupStatus, StudyGroup, UserId};

/// Member entry inside a study group response.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMemberDto {
    /// Member's user id.
    pub id: UserId,
    /// Member's display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Study group as returned by `GET /study-groups`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroupDto {
    /// Unique group id.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Subject or topic.
    #[serde(default)]
    pub subject: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Owning department label.
    #[serde(default)]
    pub department: String,
    /// Meeting schedule.
    #[serde(default)]
    pub schedule: String,
    /// Meeting location.
    #[serde(default)]
    pub location: String,
    /// Maximum number of members.
    #[serde(default)]
    pub max_participants: u32,
    /// Current member count.
    #[serde(default)]
    pub current_participants: u32,
    /// Lifecycle status.
    pub status: GroupStatus,
    /// Creator's user id.
    pub created_by: UserId,
    /// Current members. Omitted on some list responses.
    #[serde(default)]
    pub participants: Option<Vec<GroupMemberDto>>,
}

impl From<StudyGroupDto> for StudyGroup {
    fn from(dto: StudyGroupDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            subject: dto.subject,
            description: dto.description,
            department: dto.department,
            schedule: dto.schedule,
            location: dto.location,
            member_limit: dto.max_participants,
            member_count: dto.current_participants,
            status: dto.status,
            creator: dto.created_by,
            members: dto
                .participants
                .unwrap_or_default()
                .into_iter()
                .map(|m| m.id)
                .collect(),
        }
    }
}
