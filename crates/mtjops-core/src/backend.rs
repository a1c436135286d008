//! Facade over the REST client.
//!
//! One [`Backend`] per invocation: built from a resolved
//! [`BackendConfig`], it exposes typed operations and translates wire
//! types into the domain model. Every operation is a single
//! fire-and-await call — no background refresh, no automatic retry.
//! After a successful scan the **caller** re-fetches stats; nothing is
//! derived locally, so two staff scanning at the same gate always see
//! the backend's numbers.

use secrecy::SecretString;
use tracing::debug;

use mtjops_api::{OpsClient, types as wire};

use crate::config::BackendConfig;
use crate::error::CoreError;
use crate::model::{
    City, DonationBox, Donor, EntityId, Event, EventStats, EventStatus, Pass, PassCode,
    PassStatus, Region, Route,
};
use crate::picker::LocationSelection;
use crate::scan::ScanOutcome;

/// Page size used when collecting full listings.
const LIST_PAGE_SIZE: i32 = 100;

// ── Request types ───────────────────────────────────────────────────

/// Fields for creating an event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<String>,
    pub allowed_attendees: u32,
    pub is_public: bool,
}

/// Partial update for an event; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<String>,
    pub allowed_attendees: Option<u32>,
    pub is_public: Option<bool>,
}

/// Fields for registering a donor.
#[derive(Debug, Clone)]
pub struct DonorDraft {
    pub name: String,
    pub phone: Option<String>,
    pub cnic: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
}

/// Partial update for a donor.
#[derive(Debug, Clone, Default)]
pub struct DonorUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub cnic: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
}

/// A donation box placement: number, holder, and a fully resolved
/// region/city/route location.
#[derive(Debug, Clone)]
pub struct BoxPlacement {
    pub box_number: String,
    pub holder_name: String,
    pub location: LocationSelection,
}

// ── Backend ─────────────────────────────────────────────────────────

/// Typed operations against one MTJ backend.
pub struct Backend {
    client: OpsClient,
}

impl Backend {
    /// Build a backend facade from a resolved config.
    pub fn new(config: &BackendConfig) -> Result<Self, CoreError> {
        let client = OpsClient::from_token(
            config.url.as_str(),
            &config.token,
            &config.transport(),
        )?;
        Ok(Self { client })
    }

    /// Build from a base URL and token with default transport.
    pub fn from_parts(url: &str, token: &SecretString) -> Result<Self, CoreError> {
        let client =
            OpsClient::from_token(url, token, &mtjops_api::TransportConfig::default())?;
        Ok(Self { client })
    }

    // ── Events ───────────────────────────────────────────────────────

    pub async fn list_events(
        &self,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, CoreError> {
        let status_str = status.map(|s| s.to_string());
        let raw = self
            .client
            .paginate_all(LIST_PAGE_SIZE, |page, size| {
                self.client.list_events(page, size, status_str.as_deref())
            })
            .await?;
        Ok(raw.into_iter().map(Event::from).collect())
    }

    pub async fn get_event(&self, id: &EntityId) -> Result<Event, CoreError> {
        self.client
            .get_event(&id.to_string())
            .await
            .map(Event::from)
            .map_err(|e| not_found_or("event", id, e))
    }

    pub async fn create_event(&self, draft: EventDraft) -> Result<Event, CoreError> {
        let body = wire::EventCreateUpdate {
            title: Some(draft.title),
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            location: draft.location,
            allowed_attendees: Some(draft.allowed_attendees),
            is_public: Some(draft.is_public),
        };
        Ok(self.client.create_event(&body).await.map(Event::from)?)
    }

    pub async fn update_event(
        &self,
        id: &EntityId,
        update: EventUpdate,
    ) -> Result<Event, CoreError> {
        let body = wire::EventCreateUpdate {
            title: update.title,
            starts_at: update.starts_at,
            ends_at: update.ends_at,
            location: update.location,
            allowed_attendees: update.allowed_attendees,
            is_public: update.is_public,
        };
        self.client
            .update_event(&id.to_string(), &body)
            .await
            .map(Event::from)
            .map_err(|e| not_found_or("event", id, e))
    }

    // ── Passes ───────────────────────────────────────────────────────

    /// Batch-generate passes. The count bound is enforced in the API
    /// crate before any request leaves the process.
    pub async fn generate_passes(
        &self,
        event_id: &EntityId,
        count: u32,
    ) -> Result<Vec<Pass>, CoreError> {
        let raw = self
            .client
            .generate_passes(&event_id.to_string(), count)
            .await?;
        debug!(event = %event_id, count, "generated passes");
        Ok(raw.into_iter().map(Pass::from).collect())
    }

    pub async fn list_passes(
        &self,
        event_id: &EntityId,
        status: Option<PassStatus>,
    ) -> Result<Vec<Pass>, CoreError> {
        let event = event_id.to_string();
        let status_str = status.map(|s| s.to_string());
        let raw = self
            .client
            .paginate_all(LIST_PAGE_SIZE, |page, size| {
                self.client
                    .list_passes(&event, page, size, status_str.as_deref())
            })
            .await?;
        Ok(raw.into_iter().map(Pass::from).collect())
    }

    /// Revoke one unused pass. The backend refuses `used`/`revoked`
    /// passes; that refusal surfaces as [`CoreError::Rejected`] via the
    /// error envelope, never as a silent transition.
    pub async fn revoke_pass(
        &self,
        event_id: &EntityId,
        pass_id: &EntityId,
    ) -> Result<Pass, CoreError> {
        let result = self
            .client
            .revoke_pass(&event_id.to_string(), &pass_id.to_string())
            .await;
        match result {
            Ok(raw) => Ok(Pass::from(raw)),
            Err(e) if e.is_not_found() => Err(CoreError::NotFound {
                entity_type: "pass",
                identifier: pass_id.to_string(),
            }),
            Err(mtjops_api::Error::Api {
                message,
                status: 409,
                ..
            }) => Err(CoreError::Rejected { message }),
            Err(e) => Err(e.into()),
        }
    }

    /// Submit one scan and classify the result.
    ///
    /// An empty code short-circuits to [`ScanOutcome::EmptyCode`]
    /// without touching the network. Capacity is never pre-checked
    /// locally — the backend decides atomically and we classify.
    pub async fn scan(
        &self,
        event_id: &EntityId,
        code: &PassCode,
    ) -> Result<ScanOutcome, CoreError> {
        if code.is_empty() {
            return Ok(ScanOutcome::EmptyCode);
        }

        let resp = self
            .client
            .scan_pass(&event_id.to_string(), code.as_str())
            .await?;
        Ok(ScanOutcome::classify(resp))
    }

    // ── Stats ────────────────────────────────────────────────────────

    pub async fn event_stats(&self, event_id: &EntityId) -> Result<EventStats, CoreError> {
        self.client
            .get_event_stats(&event_id.to_string())
            .await
            .map(EventStats::from)
            .map_err(|e| not_found_or("event", event_id, e))
    }

    // ── Donors ───────────────────────────────────────────────────────

    pub async fn list_donors(&self) -> Result<Vec<Donor>, CoreError> {
        let raw = self
            .client
            .paginate_all(LIST_PAGE_SIZE, |page, size| {
                self.client.list_donors(page, size)
            })
            .await?;
        Ok(raw.into_iter().map(Donor::from).collect())
    }

    pub async fn get_donor(&self, id: &EntityId) -> Result<Donor, CoreError> {
        self.client
            .get_donor(&id.to_string())
            .await
            .map(Donor::from)
            .map_err(|e| not_found_or("donor", id, e))
    }

    pub async fn create_donor(&self, draft: DonorDraft) -> Result<Donor, CoreError> {
        let body = wire::DonorCreateUpdate {
            name: Some(draft.name),
            phone: draft.phone,
            cnic: draft.cnic,
            email: draft.email,
            city: draft.city,
        };
        Ok(self.client.create_donor(&body).await.map(Donor::from)?)
    }

    pub async fn update_donor(
        &self,
        id: &EntityId,
        update: DonorUpdate,
    ) -> Result<Donor, CoreError> {
        let body = wire::DonorCreateUpdate {
            name: update.name,
            phone: update.phone,
            cnic: update.cnic,
            email: update.email,
            city: update.city,
        };
        self.client
            .update_donor(&id.to_string(), &body)
            .await
            .map(Donor::from)
            .map_err(|e| not_found_or("donor", id, e))
    }

    // ── Donation boxes ───────────────────────────────────────────────

    pub async fn list_donation_boxes(&self) -> Result<Vec<DonationBox>, CoreError> {
        let raw = self
            .client
            .paginate_all(LIST_PAGE_SIZE, |page, size| {
                self.client.list_donation_boxes(page, size)
            })
            .await?;
        Ok(raw.into_iter().map(DonationBox::from).collect())
    }

    pub async fn get_donation_box(&self, id: &EntityId) -> Result<DonationBox, CoreError> {
        self.client
            .get_donation_box(&id.to_string())
            .await
            .map(DonationBox::from)
            .map_err(|e| not_found_or("donation box", id, e))
    }

    pub async fn place_donation_box(
        &self,
        placement: BoxPlacement,
    ) -> Result<DonationBox, CoreError> {
        let body = wire::DonationBoxCreate {
            box_number: placement.box_number,
            holder_name: placement.holder_name,
            region_id: placement.location.region_id.to_string(),
            city_id: placement.location.city_id.to_string(),
            route_id: placement.location.route_id.to_string(),
        };
        Ok(self
            .client
            .create_donation_box(&body)
            .await
            .map(DonationBox::from)?)
    }

    // ── Geography ────────────────────────────────────────────────────

    pub async fn list_regions(&self) -> Result<Vec<Region>, CoreError> {
        let raw = self.client.list_regions().await?;
        Ok(raw.into_iter().map(Region::from).collect())
    }

    pub async fn list_cities(&self, region_id: &EntityId) -> Result<Vec<City>, CoreError> {
        let raw = self
            .client
            .list_cities(&region_id.to_string())
            .await
            .map_err(|e| not_found_or("region", region_id, e))?;
        Ok(raw.into_iter().map(City::from).collect())
    }

    pub async fn list_routes(&self, city_id: &EntityId) -> Result<Vec<Route>, CoreError> {
        let raw = self
            .client
            .list_routes(&city_id.to_string())
            .await
            .map_err(|e| not_found_or("city", city_id, e))?;
        Ok(raw.into_iter().map(Route::from).collect())
    }
}

/// Map a 404 into a domain NotFound, passing other errors through.
fn not_found_or(entity_type: &'static str, id: &EntityId, err: mtjops_api::Error) -> CoreError {
    if err.is_not_found() {
        CoreError::NotFound {
            entity_type,
            identifier: id.to_string(),
        }
    } else {
        err.into()
    }
}
