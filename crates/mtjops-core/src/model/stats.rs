// ── Event stats projection ──

use serde::{Deserialize, Serialize};

/// Read-only aggregate over an event's passes.
///
/// Always re-fetched from the backend after any generate/scan/revoke —
/// never derived locally — so concurrent staff at the same gate can't
/// drift the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    pub capacity: u32,
    /// Number of successful check-ins (= used passes).
    pub attendees_count: u32,
    /// `capacity - attendees_count`, floored at zero.
    pub remaining: u32,
    pub passes_total: u32,
    pub passes_used: u32,
    pub passes_unused: u32,
    pub passes_revoked: u32,
}

impl EventStats {
    /// Build the projection from raw counters, flooring `remaining`.
    pub fn from_counts(capacity: u32, used: u32, unused: u32, revoked: u32) -> Self {
        Self {
            capacity,
            attendees_count: used,
            remaining: capacity.saturating_sub(used),
            passes_total: used + unused + revoked,
            passes_used: used,
            passes_unused: unused,
            passes_revoked: revoked,
        }
    }

    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_floors_at_zero() {
        // Over-capacity data from the backend must not underflow.
        let stats = EventStats::from_counts(10, 12, 0, 0);
        assert_eq!(stats.remaining, 0);
        assert!(stats.is_full());
    }

    #[test]
    fn totals_add_up() {
        let stats = EventStats::from_counts(100, 58, 55, 7);
        assert_eq!(stats.passes_total, 120);
        assert_eq!(stats.remaining, 42);
        assert_eq!(stats.attendees_count, 58);
    }
}
