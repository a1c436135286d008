// ── Core error types ──
//
// User-facing errors from mtjops-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<mtjops_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the backend: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    /// Domain-rule violation reported by the backend (capacity,
    /// non-revocable pass, permission) or by the local ledger.
    #[error("Operation rejected: {message}")]
    Rejected { message: String },

    /// Input rejected before any request was issued.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Backend error: {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mtjops_api::Error> for CoreError {
    fn from(err: mtjops_api::Error) -> Self {
        match err {
            mtjops_api::Error::InvalidToken => Self::AuthenticationFailed {
                message: "Invalid or expired API token".into(),
            },
            mtjops_api::Error::Authentication { message } => {
                Self::AuthenticationFailed { message }
            }
            mtjops_api::Error::PermissionDenied { message } => Self::Rejected {
                message: format!("permission denied: {message}"),
            },
            mtjops_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else {
                    Self::ConnectionFailed {
                        reason: e.to_string(),
                    }
                }
            }
            mtjops_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("invalid backend URL: {e}"),
            },
            mtjops_api::Error::Tls(message) => Self::ConnectionFailed { reason: message },
            mtjops_api::Error::Api {
                message,
                code,
                status,
            } => Self::Api {
                message,
                code,
                status: Some(status),
            },
            mtjops_api::Error::Deserialization { message, .. } => Self::Api {
                message: format!("unexpected response: {message}"),
                code: None,
                status: None,
            },
            mtjops_api::Error::Validation { field, reason } => Self::ValidationFailed {
                message: format!("{field}: {reason}"),
            },
        }
    }
}
