// ── Event domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// Lifecycle status of an event. Transitions are server-driven; the
/// client only reads and displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    Archived,
}

/// A foundation event (fundraiser, distribution drive, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub status: EventStatus,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    /// Capacity: bounds the number of successful check-ins.
    pub allowed_attendees: u32,
    pub is_public: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for (s, v) in [
            ("draft", EventStatus::Draft),
            ("ongoing", EventStatus::Ongoing),
            ("archived", EventStatus::Archived),
        ] {
            assert_eq!(s.parse::<EventStatus>().unwrap(), v);
            assert_eq!(v.to_string(), s);
        }
    }
}
