//! The pass check-in state machine.
//!
//! [`CheckinLedger`] holds an event's passes and applies the transition
//! rules the live backend enforces atomically on its side:
//!
//! - `unused → used` exactly once, or `unused → revoked`, never both;
//! - `used` and `revoked` are terminal for scanning;
//! - the used-count never exceeds the event's capacity, and the
//!   capacity check and the mark-used write are one step — there is no
//!   separate "pre-check" a second scanner could race against.
//!
//! The CLI uses this for gate rehearsal (scans resolved against a
//! fetched roster without consuming real passes). On the live path the
//! backend owns these rules and the client only classifies responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use mtjops_api::client::MAX_PASS_BATCH;

use crate::error::CoreError;
use crate::model::{Event, EventStats, Pass, PassCode, PassStatus};
use crate::scan::ScanOutcome;

#[derive(Debug, Clone)]
struct LedgerEntry {
    status: PassStatus,
    used_at: Option<DateTime<Utc>>,
}

/// In-memory pass ledger for one event.
#[derive(Debug)]
pub struct CheckinLedger {
    capacity: u32,
    used: u32,
    passes: HashMap<PassCode, LedgerEntry>,
}

impl CheckinLedger {
    /// Empty ledger with the given capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            used: 0,
            passes: HashMap::new(),
        }
    }

    /// Seed a ledger from an event and its fetched roster.
    pub fn from_event(event: &Event, roster: impl IntoIterator<Item = Pass>) -> Self {
        let mut ledger = Self::new(event.allowed_attendees);
        for pass in roster {
            if pass.status == PassStatus::Used {
                ledger.used += 1;
            }
            ledger.passes.insert(
                pass.code,
                LedgerEntry {
                    status: pass.status,
                    used_at: pass.used_at,
                },
            );
        }
        ledger
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Batch-create `count` unused passes with distinct unguessable
    /// codes. The same `1 ≤ count ≤ 1000` bound as the backend applies.
    pub fn generate(&mut self, count: u32) -> Result<Vec<PassCode>, CoreError> {
        if count == 0 || count > MAX_PASS_BATCH {
            return Err(CoreError::ValidationFailed {
                message: format!("count must be between 1 and {MAX_PASS_BATCH}, got {count}"),
            });
        }

        let mut created = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let code = PassCode::new(format!("MTJ-{}", Uuid::new_v4().simple()));
            self.passes.insert(
                code.clone(),
                LedgerEntry {
                    status: PassStatus::Unused,
                    used_at: None,
                },
            );
            created.push(code);
        }
        Ok(created)
    }

    /// Process one scan. Checking capacity and marking the pass used
    /// happen inside this single `&mut self` call, so the used-count
    /// can never pass `capacity`.
    pub fn scan(&mut self, code: &PassCode) -> ScanOutcome {
        if code.is_empty() {
            return ScanOutcome::EmptyCode;
        }

        let Some(entry) = self.passes.get_mut(code) else {
            return ScanOutcome::InvalidPass;
        };

        match entry.status {
            PassStatus::Unused => {
                if self.used >= self.capacity {
                    return ScanOutcome::EventFull;
                }
                entry.status = PassStatus::Used;
                entry.used_at = Some(Utc::now());
                self.used += 1;
                ScanOutcome::Admitted {
                    remaining: Some(self.capacity - self.used),
                }
            }
            PassStatus::Used => ScanOutcome::AlreadyUsed {
                used_at: entry.used_at,
            },
            PassStatus::Revoked => ScanOutcome::Revoked,
            PassStatus::Expired => ScanOutcome::Failed {
                message: "pass has expired".into(),
            },
        }
    }

    /// Revoke an unused pass. Fails on `used`, `revoked`, and
    /// `expired` passes — revocation never overwrites a terminal state.
    pub fn revoke(&mut self, code: &PassCode) -> Result<(), CoreError> {
        let Some(entry) = self.passes.get_mut(code) else {
            return Err(CoreError::NotFound {
                entity_type: "pass",
                identifier: code.to_string(),
            });
        };

        if !entry.status.is_revocable() {
            return Err(CoreError::Rejected {
                message: format!("cannot revoke a {} pass", entry.status),
            });
        }

        entry.status = PassStatus::Revoked;
        Ok(())
    }

    /// The read-only stats projection over this ledger.
    pub fn stats(&self) -> EventStats {
        let mut unused = 0;
        let mut revoked = 0;
        for entry in self.passes.values() {
            match entry.status {
                PassStatus::Unused => unused += 1,
                PassStatus::Revoked => revoked += 1,
                PassStatus::Used | PassStatus::Expired => {}
            }
        }
        EventStats::from_counts(self.capacity, self.used, unused, revoked)
    }
}
