//! Event feed orchestration: concurrent fetch plus annotation.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::ApiClient;
use crate::domain::{AnnotatedEvent, EventId, overlap};
use crate::error::ClientError;
use crate::session::Session;

/// Produces the annotated event feed.
///
/// Stateless coordinator over [`ApiClient`]: every refresh fetches the
/// three source collections concurrently, then derives the feed with
/// [`overlap::annotate`]. Nothing is cached between refreshes.
#[derive(Debug, Clone)]
pub struct FeedService {
    client: Arc<ApiClient>,
}

impl FeedService {
    /// Creates a new `FeedService` over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Returns a reference to the inner [`ApiClient`].
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Fetches events, participation history, and connections
    /// concurrently, then annotates each event.
    ///
    /// The fan-out is fail-fast: if any of the three fetches fails,
    /// the whole refresh fails and no partial feed is returned. There
    /// is no retry; the caller decides when to refresh again.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClientError`] any of the three fetches
    /// produced.
    pub async fn refresh(&self, session: &Session) -> Result<Vec<AnnotatedEvent>, ClientError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, "refreshing event feed");

        let (events, history, connections) = futures_util::try_join!(
            self.client.list_events(session, None),
            self.client.participation_history(session),
            self.client.connections(session),
        )?;

        let history_ids: Vec<EventId> = history.iter().map(|event| event.id).collect();
        let annotated = overlap::annotate(events, &history_ids, &connections);

        tracing::info!(
            %request_id,
            events = annotated.len(),
            history = history_ids.len(),
            connections = connections.len(),
            "event feed refreshed"
        );
        Ok(annotated)
    }

    /// Registers the caller for an event, then re-fetches the feed.
    ///
    /// Re-fetching is the authoritative post-mutation strategy; for a
    /// local optimistic update instead, call
    /// [`AnnotatedEvent::apply_join`] on the affected entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] from the join call or the subsequent
    /// refresh.
    pub async fn join_event(
        &self,
        session: &Session,
        id: EventId,
    ) -> Result<Vec<AnnotatedEvent>, ClientError> {
        self.client.join_event(session, id).await?;
        tracing::info!(event_id = %id, "joined event");
        self.refresh(session).await
    }

    /// Cancels the caller's registration, then re-fetches the feed.
    ///
    /// Counterpart of [`Self::join_event`]; the local alternative is
    /// [`AnnotatedEvent::apply_leave`].
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] from the cancellation call or the
    /// subsequent refresh.
    pub async fn leave_event(
        &self,
        session: &Session,
        id: EventId,
    ) -> Result<Vec<AnnotatedEvent>, ClientError> {
        self.client.leave_event(session, id).await?;
        tracing::info!(event_id = %id, "left event");
        self.refresh(session).await
    }
}
