//! Identifier newtypes for every record kind in the system.
//!
//! Each identifier is a thin wrapper over the string id the backend
//! assigns (`"sg-…"` for guests, `"ra-…"` for allocations, and so on).
//! Wrapping them buys two things:
//!
//! 1. **Type safety**: an `AllocationId` cannot be passed where a
//!    `GroupId` is expected, even though both are strings underneath.
//! 2. **Controlled generation**: records created locally (guests added
//!    through the roster, groups created lazily by the board) get fresh
//!    ids from [`GuestId::generate`] / [`GroupId::generate`] instead of
//!    ad-hoc string formatting at every call site.
//!
//! `#[serde(transparent)]` makes each id serialize as the plain inner
//! string, so `GuestId("sg-1")` is just `"sg-1"` on the wire.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Builds a fresh id: `{prefix}-` followed by 8 random hex characters.
///
/// 32 bits of randomness is plenty for ids minted on one device within one
/// editing session; uniqueness across devices is the backend's job once
/// records are persisted.
fn fresh(prefix: &str) -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 4] = rng.random();
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{suffix}")
}

/// Identifies an event (a wedding, a conference, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a guest record (`sg-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh id for a guest created locally.
    pub fn generate() -> Self {
        Self(fresh("sg"))
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a head guest — the primary contact a block of guests and
/// room allocations is registered under (`hg-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadGuestId(String);

impl HeadGuestId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeadGuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a room allocation — one bookable physical room (`ra-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationId(String);

impl AllocationId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AllocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a room group — the occupants of one allocation (`rg-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh id for a group created lazily on first drop.
    pub fn generate() -> Self {
        Self(fresh("rg"))
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a curated venue (`cv-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Wraps an id received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_id_serializes_as_plain_string() {
        // `#[serde(transparent)]` means GuestId("sg-1") → `"sg-1"`,
        // not `{"0":"sg-1"}`. The backend expects a bare string.
        let json = serde_json::to_string(&GuestId::new("sg-1")).unwrap();
        assert_eq!(json, "\"sg-1\"");
    }

    #[test]
    fn test_guest_id_deserializes_from_plain_string() {
        let id: GuestId = serde_json::from_str("\"sg-7\"").unwrap();
        assert_eq!(id, GuestId::new("sg-7"));
    }

    #[test]
    fn test_group_id_display_is_raw_id() {
        assert_eq!(GroupId::new("rg-2").to_string(), "rg-2");
    }

    #[test]
    fn test_generate_uses_expected_prefix() {
        let guest = GuestId::generate();
        let group = GroupId::generate();
        assert!(guest.as_str().starts_with("sg-"));
        assert!(group.as_str().starts_with("rg-"));
        // prefix + '-' + 8 hex chars
        assert_eq!(guest.as_str().len(), 11);
        assert_eq!(group.as_str().len(), 11);
    }

    #[test]
    fn test_generate_produces_distinct_ids() {
        // Two fresh groups minted back to back must not collide —
        // the lazy-creation path relies on this.
        let a = GroupId::generate();
        let b = GroupId::generate();
        assert_ne!(a, b);
    }
}
