//! Backend connection settings, resolved once at startup and passed
//! down explicitly — no consumer reads ambient global state.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification policy for the backend connection.
#[derive(Debug, Clone)]
pub enum TlsVerification {
    /// Use the system certificate store.
    SystemDefaults,
    /// Trust a custom CA certificate (PEM file).
    CustomCa(PathBuf),
    /// Accept any certificate (staging backends only).
    DangerAcceptInvalid,
}

/// Everything needed to talk to one operations backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base URL, e.g. `https://ops.mtjfoundation.org`.
    pub url: Url,
    /// Bearer token for the staff account.
    pub token: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Translate the TLS policy into the API crate's transport config.
    pub fn transport(&self) -> mtjops_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => mtjops_api::TlsMode::System,
            TlsVerification::CustomCa(path) => mtjops_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => mtjops_api::TlsMode::DangerAcceptInvalid,
        };
        mtjops_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
