// ── API-to-domain type conversions ──
//
// Bridges raw `mtjops_api` response types into canonical
// `mtjops_core::model` domain types. Each `From` impl parses strings
// into strong types and fills sensible defaults for missing data.

use tracing::warn;

use mtjops_api::types as wire;

use crate::model::{
    City, DonationBox, Donor, EntityId, Event, EventStats, EventStatus, Pass, PassCode,
    PassStatus, Region, Route,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// Parse an event status string; unknown values display as `draft`
/// with a warning rather than failing the whole listing.
fn parse_event_status(raw: &str) -> EventStatus {
    raw.parse().unwrap_or_else(|_| {
        warn!(status = raw, "unknown event status from backend");
        EventStatus::Draft
    })
}

/// Parse a pass status string. An unknown value is treated as
/// `expired` -- displayable but never scannable or revocable.
fn parse_pass_status(raw: &str) -> PassStatus {
    raw.parse().unwrap_or_else(|_| {
        warn!(status = raw, "unknown pass status from backend");
        PassStatus::Expired
    })
}

// ── Events ──────────────────────────────────────────────────────────

impl From<wire::EventResponse> for Event {
    fn from(r: wire::EventResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            title: r.title,
            status: parse_event_status(&r.status),
            starts_at: r.starts_at,
            ends_at: r.ends_at,
            location: r.location,
            allowed_attendees: r.allowed_attendees,
            is_public: r.is_public,
            created_at: r.created_at,
        }
    }
}

// ── Passes ──────────────────────────────────────────────────────────

impl From<wire::PassResponse> for Pass {
    fn from(r: wire::PassResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            event_id: EntityId::from(r.event_id),
            code: PassCode::new(&r.code),
            status: parse_pass_status(&r.status),
            used_at: r.used_at,
            created_at: r.created_at,
        }
    }
}

// ── Stats ───────────────────────────────────────────────────────────

impl From<wire::EventStatsResponse> for EventStats {
    fn from(r: wire::EventStatsResponse) -> Self {
        Self {
            capacity: r.capacity,
            attendees_count: r.attendees_count,
            // The backend already floors this; saturate anyway so a
            // misbehaving response can't underflow a display.
            remaining: r.remaining.min(r.capacity),
            passes_total: r.passes_total,
            passes_used: r.passes_used,
            passes_unused: r.passes_unused,
            passes_revoked: r.passes_revoked,
        }
    }
}

// ── Donation domain ─────────────────────────────────────────────────

impl From<wire::DonorResponse> for Donor {
    fn from(r: wire::DonorResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
            phone: r.phone,
            cnic: r.cnic,
            email: r.email,
            city: r.city,
            created_at: r.created_at,
        }
    }
}

impl From<wire::DonationBoxResponse> for DonationBox {
    fn from(r: wire::DonationBoxResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            box_number: r.box_number,
            holder_name: r.holder_name,
            region_id: EntityId::from(r.region_id),
            city_id: EntityId::from(r.city_id),
            route_id: EntityId::from(r.route_id),
            created_at: r.created_at,
        }
    }
}

// ── Geography ───────────────────────────────────────────────────────

impl From<wire::RegionResponse> for Region {
    fn from(r: wire::RegionResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            name: r.name,
        }
    }
}

impl From<wire::CityResponse> for City {
    fn from(r: wire::CityResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            region_id: EntityId::from(r.region_id),
            name: r.name,
        }
    }
}

impl From<wire::RouteResponse> for Route {
    fn from(r: wire::RouteResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            city_id: EntityId::from(r.city_id),
            name: r.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pass_status_maps_to_expired() {
        assert_eq!(parse_pass_status("mystery"), PassStatus::Expired);
        assert_eq!(parse_pass_status("used"), PassStatus::Used);
    }

    #[test]
    fn unknown_event_status_maps_to_draft() {
        assert_eq!(parse_event_status("???"), EventStatus::Draft);
        assert_eq!(parse_event_status("ongoing"), EventStatus::Ongoing);
    }
}
