//! Scan outcome classification.
//!
//! The backend answers a scan with a small envelope (`ok`, `code`,
//! `message`, `used_at`, `remaining`). This module maps that envelope —
//! plus the one locally produced case, the empty code — into a closed
//! set of outcomes, each with exactly one user-facing message. Nothing
//! here retries: a scan is a discrete request, and re-scanning a code
//! after a success is expected to classify as [`ScanOutcome::AlreadyUsed`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use mtjops_api::types::ScanResponse;

// Rejection codes the backend is contracted to send.
pub const CODE_EVENT_FULL: &str = "EVENT_FULL";
pub const CODE_ALREADY_USED: &str = "PASS_ALREADY_USED";
pub const CODE_INVALID_PASS: &str = "INVALID_PASS";
pub const CODE_REVOKED: &str = "PASS_REVOKED";

/// Result of one check-in scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Pass accepted; holder admitted. `remaining` is the capacity left
    /// as reported by the backend for this scan.
    Admitted { remaining: Option<u32> },
    /// Used-count already equals the event's capacity.
    EventFull,
    /// The pass was consumed earlier; `used_at` says when.
    AlreadyUsed { used_at: Option<DateTime<Utc>> },
    /// The code matches no pass for this event.
    InvalidPass,
    /// The pass was revoked while still unused.
    Revoked,
    /// Empty scanner input; produced locally, no request was sent.
    EmptyCode,
    /// Unclassified rejection from the backend.
    Failed { message: String },
}

impl ScanOutcome {
    /// Classify a backend scan response.
    pub fn classify(resp: ScanResponse) -> Self {
        if resp.ok {
            return Self::Admitted {
                remaining: resp.remaining,
            };
        }

        match resp.code.as_deref() {
            Some(CODE_EVENT_FULL) => Self::EventFull,
            Some(CODE_ALREADY_USED) => Self::AlreadyUsed {
                used_at: resp.used_at,
            },
            Some(CODE_INVALID_PASS) => Self::InvalidPass,
            Some(CODE_REVOKED) => Self::Revoked,
            _ => Self::Failed {
                message: resp
                    .message
                    .unwrap_or_else(|| "scan failed, please try again".into()),
            },
        }
    }

    /// Whether the holder was admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }

    /// The one user-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Admitted {
                remaining: Some(n), ..
            } => format!("Admitted — {n} seat(s) remaining"),
            Self::Admitted { remaining: None } => "Admitted".into(),
            Self::EventFull => "Event is at capacity — no seats remaining".into(),
            Self::AlreadyUsed { used_at: Some(at) } => {
                format!("Pass already used at {}", at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            Self::AlreadyUsed { used_at: None } => "Pass already used".into(),
            Self::InvalidPass => "Invalid pass — code not recognized for this event".into(),
            Self::Revoked => "Pass has been revoked".into(),
            Self::EmptyCode => "No code scanned — input was empty".into(),
            Self::Failed { message } => message.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rejection(code: &str) -> ScanResponse {
        ScanResponse {
            ok: false,
            code: Some(code.to_owned()),
            message: None,
            used_at: None,
            remaining: None,
        }
    }

    #[test]
    fn success_classifies_as_admitted() {
        let outcome = ScanOutcome::classify(ScanResponse {
            ok: true,
            code: None,
            message: None,
            used_at: None,
            remaining: Some(12),
        });
        assert_eq!(outcome, ScanOutcome::Admitted { remaining: Some(12) });
        assert!(outcome.is_admitted());
    }

    #[test]
    fn known_rejection_codes_map_to_distinct_outcomes() {
        assert_eq!(
            ScanOutcome::classify(rejection(CODE_EVENT_FULL)),
            ScanOutcome::EventFull
        );
        assert_eq!(
            ScanOutcome::classify(rejection(CODE_INVALID_PASS)),
            ScanOutcome::InvalidPass
        );
        assert_eq!(
            ScanOutcome::classify(rejection(CODE_REVOKED)),
            ScanOutcome::Revoked
        );
    }

    #[test]
    fn already_used_keeps_the_timestamp() {
        let at = "2026-03-01T10:15:00Z".parse().unwrap();
        let outcome = ScanOutcome::classify(ScanResponse {
            ok: false,
            code: Some(CODE_ALREADY_USED.into()),
            message: Some("Pass has already been used".into()),
            used_at: Some(at),
            remaining: None,
        });
        assert_eq!(outcome, ScanOutcome::AlreadyUsed { used_at: Some(at) });
        assert!(outcome.message().contains("2026-03-01"));
    }

    #[test]
    fn unknown_code_falls_back_to_generic_failure() {
        let outcome = ScanOutcome::classify(ScanResponse {
            ok: false,
            code: Some("SOMETHING_NEW".into()),
            message: Some("backend says no".into()),
            used_at: None,
            remaining: None,
        });
        assert_eq!(
            outcome,
            ScanOutcome::Failed {
                message: "backend says no".into()
            }
        );
    }

    #[test]
    fn missing_code_and_message_still_produce_a_message() {
        let outcome = ScanOutcome::classify(ScanResponse {
            ok: false,
            code: None,
            message: None,
            used_at: None,
            remaining: None,
        });
        assert!(!outcome.message().is_empty());
        assert!(!outcome.is_admitted());
    }
}
