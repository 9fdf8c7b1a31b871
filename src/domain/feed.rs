//! Annotated event feed entries.

use serde::Serialize;

use super::Event;

/// An [`Event`] annotated with the current user's relationship to it.
///
/// Produced by [`super::overlap::annotate`]. `participating` derives
/// from the caller's participation history, `connections_attending`
/// from cross-referencing the event roster with the caller's
/// connections. Both fields are recomputed from scratch on every
/// refresh; the feed holds no state between refreshes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedEvent {
    /// The underlying event.
    pub event: Event,

    /// Whether the current user is registered for this event.
    pub participating: bool,

    /// Display names of the caller's connections that are on the
    /// event roster, in roster order, deduplicated.
    pub connections_attending: Vec<String>,
}

impl AnnotatedEvent {
    /// Applies a successful join locally instead of re-fetching.
    ///
    /// Marks the entry as participating and bumps the participant
    /// count. No-op when already participating, so replaying a
    /// confirmation cannot inflate the count. Callers that want
    /// authoritative state should use
    /// [`crate::service::FeedService::join_event`] instead, which
    /// re-fetches the whole feed.
    pub fn apply_join(&mut self) {
        if self.participating {
            return;
        }
        self.participating = true;
        self.event.participant_count = self.event.participant_count.saturating_add(1);
    }

    /// Applies a successful cancellation locally instead of re-fetching.
    ///
    /// Counterpart of [`Self::apply_join`]; no-op when not
    /// participating.
    pub fn apply_leave(&mut self) {
        if !self.participating {
            return;
        }
        self.participating = false;
        self.event.participant_count = self.event.participant_count.saturating_sub(1);
    }
}
