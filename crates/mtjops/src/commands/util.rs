//! Shared helpers for command handlers.

use chrono::{DateTime, Utc};

use mtjops_core::{EventStatus, PassStatus};

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Parse an RFC 3339 timestamp from a `--starts`/`--ends` flag.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CliError::Validation {
            field: field.into(),
            reason: format!("expected RFC 3339 timestamp (e.g. 2026-03-01T18:00:00Z), got '{raw}'"),
        })
}

/// Parse an event status filter string.
pub fn parse_event_status(raw: &str) -> Result<EventStatus, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!(
            "expected draft|upcoming|ongoing|completed|cancelled|archived, got '{raw}'"
        ),
    })
}

/// Parse a pass status filter string.
pub fn parse_pass_status(raw: &str) -> Result<PassStatus, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "status".into(),
        reason: format!("expected unused|used|revoked|expired, got '{raw}'"),
    })
}

/// Format an optional timestamp for table cells.
pub fn fmt_time(t: Option<DateTime<Utc>>) -> String {
    t.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

/// Format an optional string for table cells.
pub fn fmt_opt(s: Option<&str>) -> String {
    s.unwrap_or("-").to_owned()
}
