//! Room inventory types: allocations (the physical rooms) and groups
//! (who is currently placed in them).

use serde::{Deserialize, Serialize};

use crate::{AllocationId, EventId, GroupId, GuestId, ModelError};

/// One bookable physical room, supplied by the inventory backend.
///
/// Allocations are immutable as far as the portal is concerned: the
/// backend creates them when inventory is negotiated, and the allocation
/// board only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAllocation {
    pub id: AllocationId,
    pub event_id: EventId,
    /// Room category ("Deluxe Room", "Suite"). Drives the board filter.
    pub room_type: String,
    /// How many occupants the room holds. Always greater than zero.
    pub max_capacity: u32,
    pub hotel_name: String,
}

impl RoomAllocation {
    /// Creates an allocation, rejecting impossible capacities.
    ///
    /// # Errors
    /// Returns [`ModelError::ZeroCapacity`] if `max_capacity` is 0.
    pub fn new(
        id: AllocationId,
        event_id: EventId,
        room_type: impl Into<String>,
        max_capacity: u32,
        hotel_name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if max_capacity == 0 {
            return Err(ModelError::ZeroCapacity);
        }
        Ok(Self {
            id,
            event_id,
            room_type: room_type.into(),
            max_capacity,
            hotel_name: hotel_name.into(),
        })
    }
}

/// The current occupants of one room allocation.
///
/// Membership order is insertion order and doubles as display order;
/// removal never reorders the remaining members. A group references
/// exactly one allocation, and at most one group exists per allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGroup {
    pub id: GroupId,
    pub allocation_id: AllocationId,
    pub guest_ids: Vec<GuestId>,
    /// Optional display name ("Parents Room") set by the organizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
}

impl RoomGroup {
    /// Creates the group for an allocation that has none yet, seeded
    /// with its first occupant. Used by the board's lazy-creation path.
    pub fn for_allocation(allocation_id: AllocationId, first_guest: GuestId) -> Self {
        Self {
            id: GroupId::generate(),
            allocation_id,
            guest_ids: vec![first_guest],
            custom_label: None,
        }
    }

    /// Whether the guest is currently a member of this group.
    pub fn contains(&self, guest_id: &GuestId) -> bool {
        self.guest_ids.iter().any(|id| id == guest_id)
    }

    /// Whether the group currently has no members. Emptied groups stay
    /// bound to their allocation rather than being deleted.
    pub fn is_empty(&self) -> bool {
        self.guest_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation_id() -> AllocationId {
        AllocationId::new("ra-1")
    }

    #[test]
    fn test_new_allocation_rejects_zero_capacity() {
        let result = RoomAllocation::new(
            allocation_id(),
            EventId::new("1"),
            "Deluxe Room",
            0,
            "The Grand Palace",
        );
        assert!(matches!(result, Err(ModelError::ZeroCapacity)));
    }

    #[test]
    fn test_allocation_wire_shape_is_camel_case() {
        let allocation = RoomAllocation::new(
            allocation_id(),
            EventId::new("1"),
            "Suite",
            4,
            "The Grand Palace",
        )
        .unwrap();
        let json: serde_json::Value = serde_json::to_value(&allocation).unwrap();

        assert_eq!(json["id"], "ra-1");
        assert_eq!(json["eventId"], "1");
        assert_eq!(json["roomType"], "Suite");
        assert_eq!(json["maxCapacity"], 4);
        assert_eq!(json["hotelName"], "The Grand Palace");
    }

    #[test]
    fn test_for_allocation_seeds_first_member() {
        let group = RoomGroup::for_allocation(allocation_id(), GuestId::new("sg-1"));
        assert_eq!(group.guest_ids, vec![GuestId::new("sg-1")]);
        assert!(group.id.as_str().starts_with("rg-"));
        assert!(group.custom_label.is_none());
    }

    #[test]
    fn test_contains_checks_membership() {
        let group = RoomGroup::for_allocation(allocation_id(), GuestId::new("sg-1"));
        assert!(group.contains(&GuestId::new("sg-1")));
        assert!(!group.contains(&GuestId::new("sg-2")));
    }

    #[test]
    fn test_group_label_omitted_when_absent() {
        let group = RoomGroup::for_allocation(allocation_id(), GuestId::new("sg-1"));
        let json: serde_json::Value = serde_json::to_value(&group).unwrap();
        assert!(json.get("customLabel").is_none());

        let labeled = RoomGroup {
            custom_label: Some("Parents Room".into()),
            ..group
        };
        let json: serde_json::Value = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json["customLabel"], "Parents Room");
    }

    #[test]
    fn test_group_round_trip() {
        let group = RoomGroup {
            id: GroupId::new("rg-1"),
            allocation_id: allocation_id(),
            guest_ids: vec![GuestId::new("sg-1"), GuestId::new("sg-2")],
            custom_label: Some("Parents Room".into()),
        };
        let bytes = serde_json::to_vec(&group).unwrap();
        let decoded: RoomGroup = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(group, decoded);
    }
}
