//! Cross-references the event roster with the caller's connections.
//!
//! Every feed screen needs the same two derived facts per event: is the
//! current user registered, and which of their connections are going.
//! [`annotate`] computes both in one pass so callers stop re-deriving
//! them from raw API responses.

use std::collections::{HashMap, HashSet};

use super::{AnnotatedEvent, Connection, Event, EventId, UserId};

/// Annotates each event with the caller's participation status and the
/// display names of connections on its roster.
///
/// Pure and total: no I/O, never fails, and the output is structurally
/// identical for identical inputs. The result preserves the order and
/// length of `events`.
///
/// Per event:
/// - `participating` is `true` iff the event id appears in
///   `participation`, regardless of whether the event's own roster
///   lists the caller (rosters can lag behind the history endpoint).
/// - `connections_attending` contains one name per *distinct* roster
///   id that is also a connection, in roster order. A connection with
///   no stored display name contributes its raw id instead of being
///   dropped.
#[must_use]
pub fn annotate(
    events: Vec<Event>,
    participation: &[EventId],
    connections: &[Connection],
) -> Vec<AnnotatedEvent> {
    let history: HashSet<EventId> = participation.iter().copied().collect();
    let names: HashMap<&UserId, Option<&str>> = connections
        .iter()
        .map(|c| (&c.user_id, c.display_name.as_deref()))
        .collect();

    events
        .into_iter()
        .map(|event| {
            let participating = history.contains(&event.id);
            let connections_attending = attending_names(&event.participants, &names);
            AnnotatedEvent {
                event,
                participating,
                connections_attending,
            }
        })
        .collect()
}

/// Order-preserving intersection of a roster with the connection map,
/// deduplicated by id, mapped to display names.
fn attending_names(
    participants: &[UserId],
    names: &HashMap<&UserId, Option<&str>>,
) -> Vec<String> {
    let mut seen: HashSet<&UserId> = HashSet::with_capacity(participants.len());
    let mut out = Vec::new();
    for id in participants {
        if !seen.insert(id) {
            continue;
        }
        if let Some(name) = names.get(id) {
            out.push(name.map_or_else(|| id.to_string(), ToString::to_string));
        }
    }
    out
}
