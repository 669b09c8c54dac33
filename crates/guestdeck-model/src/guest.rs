//! Guest records: the people being housed.
//!
//! Two levels of organization: a [`HeadGuest`] is the primary contact a
//! block of invitations is registered under ("Bride's Family"); each
//! [`Guest`] under them is one invited party — possibly more than one
//! person, which is what [`Guest::size`] accounts for.

use serde::{Deserialize, Serialize};

use crate::{EventId, GuestId, HeadGuestId, ModelError};

fn default_guest_count() -> u32 {
    1
}

/// One invited party under a head guest.
///
/// `guest_count` is the number of capacity units this record consumes when
/// placed in a room: the named guest plus any family members registered
/// with them. A record that omits it on the wire counts as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    pub head_guest_id: HeadGuestId,
}

impl Guest {
    /// Creates a guest with the minimum required fields.
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyGuestName`] if the name is blank.
    pub fn new(
        id: GuestId,
        name: impl Into<String>,
        head_guest_id: HeadGuestId,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyGuestName);
        }
        Ok(Self {
            id,
            name,
            email: None,
            phone: None,
            age: None,
            guest_count: 1,
            head_guest_id,
        })
    }

    /// Capacity units this party occupies. A stored `guest_count` of zero
    /// (possible on hand-built records) reads as the guest alone.
    pub fn size(&self) -> u32 {
        self.guest_count.max(1)
    }

    /// Whether this record covers more people than the named guest.
    pub fn is_family(&self) -> bool {
        self.size() > 1
    }
}

/// The primary contact a block of guests and room allocations belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadGuest {
    pub id: HeadGuestId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub event_id: EventId,
    /// Label for the sub-group this contact organizes ("Groom's Family").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group_name: Option<String>,
}
