use thiserror::Error;

/// Top-level error type for the `mtjops-api` crate.
///
/// Covers transport, authentication, backend error envelopes, and the
/// local pre-request validations. `mtjops-core` maps these into
/// user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token rejected by the backend (HTTP 401).
    #[error("Invalid or expired API token")]
    InvalidToken,

    /// Auth setup failed before a request could be made
    /// (e.g. token contains characters not valid in a header).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Operation refused for this account (HTTP 403).
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Structured error from the backend's `{message, code}` envelope.
    #[error("Backend error (HTTP {status}): {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Local validation ────────────────────────────────────────────
    /// Input rejected before any request was issued.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the failure happened before a request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Extract the backend error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
