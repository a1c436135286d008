//! Async REST client for the MTJ Foundation operations backend.
//!
//! This crate is the transport layer of the workspace: it knows how to
//! reach the backend (base URL, bearer token, TLS), how each endpoint is
//! spelled on the wire, and how the backend's `{message, code}` error
//! envelope is decoded. It deliberately knows nothing about check-in
//! rules — a scan that the backend rejects still deserializes cleanly
//! here and is classified upstream in `mtjops-core`.
//!
//! Entry point is [`OpsClient`], built from a base URL, a token, and a
//! [`TransportConfig`].

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::OpsClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
