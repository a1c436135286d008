//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use mtjops_config::ConfigError;
use mtjops_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the backend")]
    #[diagnostic(
        code(mtjops::connection_failed),
        help(
            "Check that the backend is reachable and the server URL is correct.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(mtjops::auth_failed),
        help(
            "Your API token was rejected.\n\
             Store a fresh one with: mtjops config set-token --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(mtjops::no_credentials),
        help(
            "Store a token with: mtjops config set-token --profile {profile}\n\
             Or set the MTJOPS_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(mtjops::not_found),
        help("Run: mtjops {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    /// Backend refused a state transition (revoking a used pass, etc.).
    #[error("Operation rejected: {message}")]
    #[diagnostic(code(mtjops::rejected))]
    Rejected { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(mtjops::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mtjops::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(mtjops::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: mtjops config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No backend configured")]
    #[diagnostic(
        code(mtjops::no_config),
        help(
            "Create a profile with: mtjops config init --server <URL>\n\
             Or pass --server / set MTJOPS_SERVER.\n\
             Config expected at: {path}"
        )
    )]
    NoConfig { path: String },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out")]
    #[diagnostic(
        code(mtjops::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout,

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::CONFLICT,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed { reason },

            CoreError::AuthenticationFailed { message: _ } => Self::AuthFailed {
                profile: "current".into(),
            },

            CoreError::Timeout => Self::Timeout,

            CoreError::NotFound {
                entity_type,
                identifier,
            } => Self::NotFound {
                list_command: list_command_for(entity_type),
                resource_type: entity_type.into(),
                identifier,
            },

            CoreError::Rejected { message } => Self::Rejected { message },

            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Api { message, code, .. } => Self::ApiError {
                code: code.unwrap_or_default(),
                message,
            },

            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

/// The listing command a user would run to find a misspelled id.
fn list_command_for(entity_type: &str) -> String {
    match entity_type {
        "event" => "events list".into(),
        "pass" => "passes list <EVENT>".into(),
        "donor" => "donors list".into(),
        "donation box" => "boxes list".into(),
        "region" => "geo regions".into(),
        "city" => "geo cities <REGION>".into(),
        "route" => "geo routes <CITY>".into(),
        other => format!("{other}s list"),
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoToken { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Validation {
                field: "config".into(),
                reason: other.to_string(),
            },
        }
    }
}
