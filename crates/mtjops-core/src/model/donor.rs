// ── Donation domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A registered donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    pub id: EntityId,
    pub name: String,
    pub phone: Option<String>,
    pub cnic: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A physical donation box placed on a collection route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationBox {
    pub id: EntityId,
    pub box_number: String,
    pub holder_name: String,
    pub region_id: EntityId,
    pub city_id: EntityId,
    pub route_id: EntityId,
    pub created_at: Option<DateTime<Utc>>,
}
