//! Event DTOs for list, detail, and mutation endpoints.
//!
//! The backend speaks Portuguese field names; serde renames keep the
//! wire format intact while the crate uses English identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Event, EventId, UserId};

/// Roster entry inside an event response.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRefDto {
    /// Id of the registered user.
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
}

/// Event as returned by `GET /api/eventos`, `GET /api/eventos/{id}`,
/// and `GET /api/eventos/historico`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    /// Unique event id.
    pub id: EventId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Scheduled date and time.
    #[serde(rename = "data")]
    pub starts_at: DateTime<Utc>,
    /// Owning course label.
    #[serde(rename = "curso", default)]
    pub course: String,
    /// Venue or meeting point.
    #[serde(rename = "localizacao", default)]
    pub location: String,
    /// Additional organizer notes.
    #[serde(rename = "observacoes_adicionais", default)]
    pub notes: String,
    /// Participant cap. The backend uses `0`, `null`, or omission for
    /// unbounded events.
    #[serde(rename = "limite_participantes", default)]
    pub participant_limit: Option<u32>,
    /// Current participant count.
    #[serde(rename = "total_participantes", default)]
    pub participant_count: u32,
    /// Creator's user id.
    #[serde(rename = "criador_id")]
    pub creator: UserId,
    /// Roster of registered participants. Frequently omitted or null
    /// on list responses.
    #[serde(rename = "evento_participantes", default)]
    pub participants: Option<Vec<ParticipantRefDto>>,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            starts_at: dto.starts_at,
            course: dto.course,
            location: dto.location,
            notes: dto.notes,
            // A cap of 0 means "no limit" on the wire.
            participant_limit: dto.participant_limit.filter(|&limit| limit > 0),
            participant_count: dto.participant_count,
            creator: dto.creator,
            participants: dto
                .participants
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.user_id)
                .collect(),
        }
    }
}

/// Request body for `POST /api/eventos` and `PUT /api/eventos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct EventRequest {
    /// Display name (required by the backend).
    #[serde(rename = "nome")]
    pub name: String,
    /// Free-form description (required by the backend).
    #[serde(rename = "descricao")]
    pub description: String,
    /// Scheduled date and time, ISO-8601.
    #[serde(rename = "data")]
    pub starts_at: DateTime<Utc>,
    /// Owning course label (required by the backend).
    #[serde(rename = "curso")]
    pub course: String,
    /// Venue or meeting point.
    #[serde(rename = "localizacao")]
    pub location: String,
    /// Additional organizer notes.
    #[serde(rename = "observacoes_adicionais")]
    pub notes: String,
    /// Participant cap; `0` requests an unbounded event.
    #[serde(rename = "limite_participantes")]
    pub participant_limit: u32,
}
