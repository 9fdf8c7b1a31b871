//! Event endpoints: listing, details, history, CRUD, participation.

use super::ApiClient;
use super::dto::{EventDto, EventRequest, ListEnvelope};
use crate::domain::{Event, EventId};
use crate::error::ClientError;
use crate::session::Session;

impl ApiClient {
    /// `GET /api/eventos` — lists events, optionally filtered by name.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn list_events(
        &self,
        session: &Session,
        name_filter: Option<&str>,
    ) -> Result<Vec<Event>, ClientError> {
        let envelope: ListEnvelope<EventDto> = match name_filter {
            Some(name) => {
                self.get_json_query("/api/eventos", &[("nome", name)], session)
                    .await?
            }
            None => self.get_json("/api/eventos", session).await?,
        };
        Ok(envelope.data.into_iter().map(Event::from).collect())
    }

    /// `GET /api/eventos/{id}` — fetches one event with its roster.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id, or another
    /// [`ClientError`] on transport/backend failure.
    pub async fn event(&self, session: &Session, id: EventId) -> Result<Event, ClientError> {
        let dto: EventDto = self.get_json(&format!("/api/eventos/{id}"), session).await?;
        Ok(Event::from(dto))
    }

    /// `GET /api/eventos/historico` — the caller's participation
    /// history. Only the ids are needed to derive the participating
    /// flag, but the full events come back for display.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn participation_history(
        &self,
        session: &Session,
    ) -> Result<Vec<Event>, ClientError> {
        let envelope: ListEnvelope<EventDto> =
            self.get_json("/api/eventos/historico", session).await?;
        Ok(envelope.data.into_iter().map(Event::from).collect())
    }

    /// `POST /api/eventos` — creates an event.
    ///
    /// The response body is not relied upon; callers refresh the list
    /// for authoritative state, as [`crate::service::FeedService`]
    /// does.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn create_event(
        &self,
        session: &Session,
        event: &EventRequest,
    ) -> Result<(), ClientError> {
        self.post_json_no_content("/api/eventos", event, session)
            .await
    }

    /// `PUT /api/eventos/{id}` — replaces an event's fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn update_event(
        &self,
        session: &Session,
        id: EventId,
        event: &EventRequest,
    ) -> Result<(), ClientError> {
        self.put_json_no_content(&format!("/api/eventos/{id}"), event, session)
            .await
    }

    /// `DELETE /api/eventos/{id}` — removes an event.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn delete_event(&self, session: &Session, id: EventId) -> Result<(), ClientError> {
        self.delete_no_content(&format!("/api/eventos/{id}"), session)
            .await
    }

    /// `POST /api/eventos/{id}/participar` — registers the caller for
    /// an event.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn join_event(&self, session: &Session, id: EventId) -> Result<(), ClientError> {
        self.post_no_content(&format!("/api/eventos/{id}/participar"), session)
            .await
    }

    /// `DELETE /api/eventos/{id}/participar` — cancels the caller's
    /// registration.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport or backend failure.
    pub async fn leave_event(&self, session: &Session, id: EventId) -> Result<(), ClientError> {
        self.delete_no_content(&format!("/api/eventos/{id}/participar"), session)
            .await
    }
}
