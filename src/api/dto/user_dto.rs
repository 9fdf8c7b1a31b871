//! Connection and profile DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, UserId, UserProfile};

/// Connection record as returned by `GET /api/users/{id}/conexoes`
/// and `GET /api/users/{id}/sugestoes`.
///
/// The backend returns partial records: every field except `id` can be
/// missing or null, so everything else is defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    /// The connected user's id.
    pub id: UserId,
    /// The connected user's display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The connected user's course label.
    #[serde(rename = "curso", default)]
    pub course: Option<String>,
    /// The connected user's semester.
    #[serde(rename = "semestre", default)]
    pub semester: Option<u32>,
}

impl From<ConnectionDto> for Connection {
    fn from(dto: ConnectionDto) -> Self {
        Self {
            user_id: dto.id,
            display_name: dto.name,
            course: dto.course.unwrap_or_default(),
            semester: dto.semester,
        }
    }
}

/// Profile as returned by `GET /api/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDto {
    /// The user's id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account e-mail address.
    pub email: String,
    /// Enrolled course.
    #[serde(rename = "curso", default)]
    pub course: Option<String>,
    /// Current semester.
    #[serde(rename = "semestre", default)]
    pub semester: Option<u32>,
    /// Self-selected interest tags.
    #[serde(rename = "interesses", default)]
    pub interests: Option<Vec<String>>,
}

impl From<ProfileDto> for UserProfile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            course: dto.course,
            semester: dto.semester,
            interests: dto.interests.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: String,
    /// New course label.
    #[serde(rename = "curso")]
    pub course: String,
    /// New semester.
    #[serde(rename = "semestre")]
    pub semester: u32,
    /// New interest tags.
    #[serde(rename = "interesses")]
    pub interests: Vec<String>,
}
