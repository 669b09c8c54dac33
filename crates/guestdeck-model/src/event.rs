//! Event records and their derived inventory-risk classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::EventId;

/// Inventory consumption (percent) at or above which an event is flagged
/// medium risk.
pub const RISK_MEDIUM_PCT: u32 = 70;
/// Inventory consumption (percent) at or above which an event is flagged
/// high risk.
pub const RISK_HIGH_PCT: u32 = 90;

/// Lifecycle status of an event, lowercase on the wire (`"active"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Upcoming,
    Active,
    Completed,
}

/// How close an event is to exhausting its negotiated room inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryRisk {
    Low,
    Medium,
    High,
}

/// An event being managed through the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub organizer: String,
    pub guest_count: u32,
    pub hotel_count: u32,
    /// Percentage of negotiated room inventory already consumed.
    pub inventory_consumed: u32,
    pub status: EventStatus,
}

impl Event {
    /// Classifies the event's inventory consumption against the risk
    /// thresholds ([`RISK_MEDIUM_PCT`] / [`RISK_HIGH_PCT`]).
    pub fn inventory_risk(&self) -> InventoryRisk {
        if self.inventory_consumed >= RISK_HIGH_PCT {
            InventoryRisk::High
        } else if self.inventory_consumed >= RISK_MEDIUM_PCT {
            InventoryRisk::Medium
        } else {
            InventoryRisk::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(consumed: u32) -> Event {
        Event {
            id: EventId::new("1"),
            name: "Ananya & Rahul Wedding".into(),
            location: "Jaipur".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            organizer: "Ananya Sharma".into(),
            guest_count: 240,
            hotel_count: 5,
            inventory_consumed: consumed,
            status: EventStatus::Active,
        }
    }

    #[test]
    fn test_inventory_risk_thresholds() {
        assert_eq!(event(0).inventory_risk(), InventoryRisk::Low);
        assert_eq!(event(69).inventory_risk(), InventoryRisk::Low);
        // Boundaries are inclusive.
        assert_eq!(event(70).inventory_risk(), InventoryRisk::Medium);
        assert_eq!(event(89).inventory_risk(), InventoryRisk::Medium);
        assert_eq!(event(90).inventory_risk(), InventoryRisk::High);
        assert_eq!(event(100).inventory_risk(), InventoryRisk::High);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        // The backend sends statuses pre-lowercased ("draft", "active").
        let json = serde_json::to_string(&EventStatus::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");

        let status: EventStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, EventStatus::Draft);
    }

    #[test]
    fn test_event_dates_serialize_as_iso_strings() {
        let json: serde_json::Value = serde_json::to_value(event(82)).unwrap();
        assert_eq!(json["startDate"], "2026-02-12");
        assert_eq!(json["endDate"], "2026-02-14");
        assert_eq!(json["inventoryConsumed"], 82);
    }

    #[test]
    fn test_event_round_trip() {
        let original = event(82);
        let bytes = serde_json::to_vec(&original).unwrap();
        let decoded: Event = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(original, decoded);
    }
}
