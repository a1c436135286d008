//! Wire types for the operations backend.
//!
//! These mirror the backend's JSON shapes exactly (snake_case bodies,
//! camelCase pagination fields). Domain types live in `mtjops-core`;
//! nothing here carries behavior beyond serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Pagination ──────────────────────────────────────────────────────

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Total records across all pages.
    pub total: i64,
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i32,
}

// ── Events ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    /// draft | upcoming | ongoing | completed | cancelled | archived
    pub status: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub allowed_attendees: u32,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating an event. Optional fields are omitted
/// from the JSON so a PATCH only touches what the caller set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventCreateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_attendees: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

// ── Passes ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PassResponse {
    pub id: String,
    pub event_id: String,
    pub code: String,
    /// unused | used | revoked | expired
    pub status: String,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub pass_code: String,
}

/// Result envelope from `POST events/{id}/passes/scan`.
///
/// `ok: false` is a domain outcome, not a transport failure — the
/// backend answers 200 with a rejection code so gate stations can show
/// a specific message. Classification lives in `mtjops-core`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanResponse {
    pub ok: bool,
    /// Rejection code (EVENT_FULL, PASS_ALREADY_USED, INVALID_PASS,
    /// PASS_REVOKED, ...). Absent on success.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// When the pass was consumed — present on PASS_ALREADY_USED.
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
    /// Remaining capacity after a successful scan.
    #[serde(default)]
    pub remaining: Option<u32>,
}

// ── Stats ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct EventStatsResponse {
    pub capacity: u32,
    pub attendees_count: u32,
    pub remaining: u32,
    pub passes_total: u32,
    pub passes_used: u32,
    pub passes_unused: u32,
    pub passes_revoked: u32,
}

// ── Donation domain ─────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DonorResponse {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub cnic: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DonorCreateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DonationBoxResponse {
    pub id: String,
    pub box_number: String,
    pub holder_name: String,
    pub region_id: String,
    pub city_id: String,
    pub route_id: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationBoxCreate {
    pub box_number: String,
    pub holder_name: String,
    pub region_id: String,
    pub city_id: String,
    pub route_id: String,
}

// ── Geography ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RegionResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityResponse {
    pub id: String,
    pub region_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub id: String,
    pub city_id: String,
    pub name: String,
}
