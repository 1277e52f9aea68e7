//! Event projections returned by search operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::actor::Actor;
use super::address::Address;
use super::media::Media;
use super::tag::Tag;

/// Publication status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Date or attendance not settled yet.
    Tentative,
    /// Happening as announced.
    Confirmed,
    /// Called off.
    Cancelled,
}

/// Event type filter accepted by searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Held at a physical address.
    InPerson,
    /// Held online.
    Online,
}

/// Subset of event options requested by search documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOptions {
    /// Whether the event takes place online.
    #[serde(default)]
    pub is_online: bool,
}

/// Participation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ParticipantStats {
    /// Confirmed participants.
    #[serde(default)]
    pub participant: u64,
}

/// An event as listed in search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Opaque identifier.
    pub id: String,
    /// Public UUID used in event URLs.
    pub uuid: Uuid,
    /// Title.
    pub title: String,
    /// Start time.
    pub begins_on: DateTime<Utc>,
    /// End time, when known.
    #[serde(default)]
    pub ends_on: Option<DateTime<Utc>>,
    /// Publication status.
    pub status: EventStatus,
    /// Canonical URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Header picture.
    #[serde(default)]
    pub picture: Option<Media>,
    /// Tags attached to the event.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Venue, for in-person events.
    #[serde(default)]
    pub physical_address: Option<Address>,
    /// Actor who created the event.
    #[serde(default)]
    pub organizer_actor: Option<Actor>,
    /// Group the event is published under.
    #[serde(default)]
    pub attributed_to: Option<Actor>,
    /// Participation counters.
    #[serde(default)]
    pub participant_stats: Option<ParticipantStats>,
    /// Online flag and other options.
    #[serde(default)]
    pub options: EventOptions,
}

impl EventSummary {
    /// The actor shown as organiser: the group when set, else the creator.
    #[must_use]
    pub fn organizer(&self) -> Option<&Actor> {
        self.attributed_to.as_ref().or(self.organizer_actor.as_ref())
    }

    /// Whether the event has been called off.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.status, EventStatus::Cancelled)
    }
}

/// Event fields embedded in a report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportedEvent {
    /// Opaque identifier.
    pub id: String,
    /// Public UUID.
    pub uuid: Uuid,
    /// Title.
    pub title: String,
    /// Header picture.
    #[serde(default)]
    pub picture: Option<Media>,
}

#[cfg(test)]
mod tests {
    //! Event decoding.

    use super::*;
    use serde_json::json;

    fn event_json() -> serde_json::Value {
        json!({
            "id": "5",
            "uuid": "5d1f8b6a-0c55-4b3a-9a79-6f5c8f0e2a11",
            "title": "Picnic",
            "beginsOn": "2026-06-01T10:00:00Z",
            "status": "CONFIRMED",
            "tags": [{ "id": "1", "slug": "outdoor", "title": "Outdoor" }],
            "organizerActor": { "id": "1", "preferredUsername": "alice" },
            "attributedTo": { "id": "9", "preferredUsername": "hikers" },
            "options": { "isOnline": true },
            "__typename": "Event"
        })
    }

    #[test]
    fn decodes_search_projection() {
        let event: EventSummary =
            serde_json::from_value(event_json()).expect("event should decode");
        assert_eq!(event.title, "Picnic");
        assert_eq!(event.tags.len(), 1);
        assert!(event.options.is_online);
        assert!(!event.is_cancelled());
        assert_eq!(
            event.organizer().map(|actor| actor.preferred_username.as_str()),
            Some("hikers")
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let mut payload = event_json();
        payload["status"] = json!("POSTPONED");
        assert!(serde_json::from_value::<EventSummary>(payload).is_err());
    }

    #[test]
    fn rejects_malformed_uuid() {
        let mut payload = event_json();
        payload["uuid"] = json!("not-a-uuid");
        assert!(serde_json::from_value::<EventSummary>(payload).is_err());
    }

    #[test]
    fn missing_options_default_to_in_person() {
        let mut payload = event_json();
        if let Some(object) = payload.as_object_mut() {
            object.remove("options");
        }
        let event: EventSummary = serde_json::from_value(payload).expect("event should decode");
        assert!(!event.options.is_online);
    }
}
