// ── Pass domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::{EntityId, PassCode};

/// Status of a redeemable pass.
///
/// `unused → used` happens exactly once, or `unused → revoked`, never
/// both. `used` and `revoked` are terminal for scanning. `expired`
/// exists for display only -- no client flow transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    Unused,
    Used,
    Revoked,
    Expired,
}

impl PassStatus {
    /// Whether a scan can ever succeed from this status.
    pub fn is_scannable(self) -> bool {
        matches!(self, Self::Unused)
    }

    /// Whether revocation is permitted from this status.
    pub fn is_revocable(self) -> bool {
        matches!(self, Self::Unused)
    }
}

/// A redeemable pass owned by an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pass {
    pub id: EntityId,
    pub event_id: EntityId,
    pub code: PassCode,
    pub status: PassStatus,
    /// Stamped when the pass transitions to `used`.
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unused_is_scannable() {
        assert!(PassStatus::Unused.is_scannable());
        assert!(!PassStatus::Used.is_scannable());
        assert!(!PassStatus::Revoked.is_scannable());
        assert!(!PassStatus::Expired.is_scannable());
    }

    #[test]
    fn only_unused_is_revocable() {
        assert!(PassStatus::Unused.is_revocable());
        assert!(!PassStatus::Used.is_revocable());
        assert!(!PassStatus::Revoked.is_revocable());
    }
}
