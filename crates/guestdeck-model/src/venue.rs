//! Curated venue catalog entries shown on an event's venue page.

use serde::{Deserialize, Serialize};

use crate::{EventId, VenueId};

/// A hotel handpicked for an event by the agents. Read-only listing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub event_id: EventId,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_round_trip() {
        let venue = Venue {
            id: VenueId::new("cv-1"),
            event_id: EventId::new("1"),
            name: "The Grand Palace".into(),
            location: "Jaipur, Rajasthan".into(),
            description: "A luxurious heritage hotel.".into(),
            amenities: vec!["Swimming Pool".into(), "Spa & Wellness".into()],
            images: vec!["/hotel-grand-palace.png".into()],
        };
        let bytes = serde_json::to_vec(&venue).unwrap();
        let decoded: Venue = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(venue, decoded);
    }

    #[test]
    fn test_venue_lists_default_to_empty() {
        let json = r#"{
            "id": "cv-9",
            "eventId": "1",
            "name": "Lakeside Retreat",
            "location": "Jaipur, Rajasthan",
            "description": "A serene lakeside property."
        }"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        assert!(venue.amenities.is_empty());
        assert!(venue.images.is_empty());
    }
}
