//! Domain layer between `mtjops-api` and UI consumers (the CLI).
//!
//! This crate owns the business rules of the pass / check-in workflow
//! and the domain model for the supporting CRUD surfaces:
//!
//! - **[`Backend`]** — Facade over the REST client. Every operation is a
//!   single fire-and-await request; there is no background refresh, no
//!   retry, and no local pre-check of capacity before a scan. Local
//!   validations (batch count range, empty pass code) short-circuit
//!   before the network is touched.
//!
//! - **[`ScanOutcome`]** — Closed-set classification of a scan result.
//!   Each outcome maps to one distinct user-facing message; anything
//!   the backend sends outside the known codes falls into
//!   [`ScanOutcome::Failed`].
//!
//! - **[`CheckinLedger`]** — The pass state machine itself: `unused →
//!   used` exactly once, `unused → revoked`, and capacity accounting
//!   where "check used-count < capacity and mark used" is one step.
//!   Drives the gate's rehearsal mode and states the rules the backend
//!   enforces atomically on the live path.
//!
//! - **[`LocationPicker`]** — Dependent-state reducer for the
//!   region → city → route cascade used by donation-box placement.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Event`, `Pass`,
//!   `EventStats`, `Donor`, ...) with [`EntityId`] supporting both UUID
//!   and opaque string identifiers.

pub mod backend;
pub mod checkin;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod picker;
pub mod scan;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::{Backend, BoxPlacement, DonorDraft, DonorUpdate, EventDraft, EventUpdate};
pub use checkin::CheckinLedger;
pub use config::{BackendConfig, TlsVerification};
pub use error::CoreError;
pub use picker::{LocationPicker, LocationSelection};
pub use scan::ScanOutcome;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    City, DonationBox, Donor, EntityId, Event, EventStats, EventStatus, Pass, PassCode,
    PassStatus, Region, Route,
};
