//! Canonical domain types, decoupled from wire shapes.

pub mod donor;
pub mod entity_id;
pub mod event;
pub mod geo;
pub mod pass;
pub mod stats;

pub use donor::{DonationBox, Donor};
pub use entity_id::{EntityId, PassCode};
pub use event::{Event, EventStatus};
pub use geo::{City, Region, Route};
pub use pass::{Pass, PassStatus};
pub use stats::EventStats;
