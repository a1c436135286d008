// ── Core identity types ──
//
// EntityId and PassCode form the foundation of every domain type.
// EntityId unifies UUID-based and opaque string identifiers behind a
// single interface; PassCode carries the unguessable redeemable code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ── EntityId ────────────────────────────────────────────────────────

/// Canonical identifier for any backend entity.
///
/// Transparently wraps either a UUID or an opaque string id (the
/// backend mixes both across domains). Consumers never care which.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Uuid(Uuid),
    Raw(String),
}

impl EntityId {
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Raw(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

// ── PassCode ────────────────────────────────────────────────────────

/// Redeemable pass code, normalized by trimming surrounding whitespace.
///
/// The code itself is opaque and unguessable; this type only guards the
/// one local rule the gate enforces: an empty code is never sent to the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassCode(String);

impl PassCode {
    /// Create a code from raw scanner input. Surrounding whitespace
    /// (QR scanners love trailing newlines) is stripped.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PassCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_uuid_string() {
        let id = EntityId::from("550e8400-e29b-41d4-a716-446655440000".to_owned());
        assert!(id.as_uuid().is_some());
    }

    #[test]
    fn entity_id_from_opaque_string() {
        let id = EntityId::from("ev-20260301-iftar".to_owned());
        assert!(id.as_uuid().is_none());
        assert_eq!(id.to_string(), "ev-20260301-iftar");
    }

    #[test]
    fn pass_code_trims_scanner_noise() {
        let code = PassCode::new("  MTJ-7F3A9C \r\n");
        assert_eq!(code.as_str(), "MTJ-7F3A9C");
    }

    #[test]
    fn pass_code_detects_empty_input() {
        assert!(PassCode::new("").is_empty());
        assert!(PassCode::new("   \n").is_empty());
        assert!(!PassCode::new("x").is_empty());
    }
}
