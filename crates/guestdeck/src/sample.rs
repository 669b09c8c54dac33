//! The in-memory development dataset.
//!
//! Every constructor here returns the same fixed records the portal runs
//! on before a real backend is wired in. The demo binary, the integration
//! tests, and [`StaticDirectory`](crate::StaticDirectory) all draw from
//! this module, so the numbers are chosen to exercise the interesting
//! paths: a family too big for the small rooms, two rooms pre-filled to
//! capacity, three room types across two hotels.

use chrono::NaiveDate;
use guestdeck_model::{
    AllocationId, Event, EventId, EventStatus, GroupId, Guest, GuestId,
    HeadGuest, HeadGuestId, RoomAllocation, RoomGroup, Venue, VenueId,
};

use crate::WorkspaceSeed;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The three events the portal dashboard shows.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new("1"),
            name: "Ananya & Rahul Wedding".into(),
            location: "Jaipur".into(),
            start_date: date(2026, 2, 12),
            end_date: date(2026, 2, 14),
            organizer: "Ananya Sharma".into(),
            guest_count: 240,
            hotel_count: 5,
            inventory_consumed: 82,
            status: EventStatus::Active,
        },
        Event {
            id: EventId::new("2"),
            name: "Tech Summit 2026".into(),
            location: "Bangalore".into(),
            start_date: date(2026, 3, 20),
            end_date: date(2026, 3, 22),
            organizer: "TechCorp Events".into(),
            guest_count: 450,
            hotel_count: 3,
            inventory_consumed: 65,
            status: EventStatus::Upcoming,
        },
        Event {
            id: EventId::new("3"),
            name: "Annual Sales Conference".into(),
            location: "Mumbai".into(),
            start_date: date(2026, 4, 15),
            end_date: date(2026, 4, 17),
            organizer: "Global Sales Inc".into(),
            guest_count: 180,
            hotel_count: 2,
            inventory_consumed: 90,
            status: EventStatus::Active,
        },
    ]
}

/// The two head guests registered for the wedding.
pub fn sample_head_guests() -> Vec<HeadGuest> {
    vec![
        HeadGuest {
            id: HeadGuestId::new("hg-123"),
            name: "Rajesh Sharma".into(),
            email: Some("rajesh.sharma@example.com".into()),
            phone: Some("+91 98765 43210".into()),
            event_id: EventId::new("1"),
            sub_group_name: Some("Bride's Family".into()),
        },
        HeadGuest {
            id: HeadGuestId::new("hg-124"),
            name: "Priya Verma".into(),
            email: Some("priya.verma@example.com".into()),
            phone: Some("+91 98765 43211".into()),
            event_id: EventId::new("1"),
            sub_group_name: Some("Groom's Family".into()),
        },
    ]
}

fn sharma(
    id: &str,
    name: &str,
    email: Option<&str>,
    age: u32,
    guest_count: u32,
) -> Guest {
    Guest {
        id: GuestId::new(id),
        name: name.into(),
        email: email.map(String::from),
        phone: None,
        age: Some(age),
        guest_count,
        head_guest_id: HeadGuestId::new("hg-123"),
    }
}

/// The bride's-family guest block: seven records, one a family of three.
pub fn sample_guests() -> Vec<Guest> {
    vec![
        sharma("sg-1", "Amit Sharma", Some("amit@example.com"), 34, 1),
        sharma("sg-2", "Neha Sharma", Some("neha@example.com"), 32, 1),
        sharma("sg-3", "Vikram Sharma", Some("vikram@example.com"), 28, 1),
        sharma("sg-4", "Sonia Sharma", None, 26, 1),
        sharma("sg-5", "Rahul Sharma (Family)", None, 40, 3),
        sharma("sg-6", "Kavita Sharma", None, 60, 1),
        sharma("sg-7", "Arjun Sharma", None, 62, 1),
    ]
}

fn room(id: &str, room_type: &str, max_capacity: u32, hotel_name: &str) -> RoomAllocation {
    RoomAllocation::new(
        AllocationId::new(id),
        EventId::new("1"),
        room_type,
        max_capacity,
        hotel_name,
    )
    .expect("sample capacities are positive")
}

/// The negotiated room inventory: five rooms, three types, two hotels.
pub fn sample_allocations() -> Vec<RoomAllocation> {
    vec![
        room("ra-1", "Deluxe Room", 2, "The Grand Palace"),
        room("ra-2", "Deluxe Room", 2, "The Grand Palace"),
        room("ra-3", "Suite", 4, "The Grand Palace"),
        room("ra-4", "Premium Room", 3, "Royal Heritage"),
        room("ra-5", "Premium Room", 3, "Royal Heritage"),
    ]
}

/// Two rooms already filled to capacity, labels and all.
pub fn sample_groups() -> Vec<RoomGroup> {
    vec![
        RoomGroup {
            id: GroupId::new("rg-1"),
            allocation_id: AllocationId::new("ra-1"),
            guest_ids: vec![GuestId::new("sg-1"), GuestId::new("sg-2")],
            custom_label: Some("Parents Room".into()),
        },
        RoomGroup {
            id: GroupId::new("rg-2"),
            allocation_id: AllocationId::new("ra-2"),
            guest_ids: vec![GuestId::new("sg-3"), GuestId::new("sg-4")],
            custom_label: Some("Siblings Room".into()),
        },
    ]
}

fn venue(id: &str, name: &str, description: &str, amenities: &[&str], image: &str) -> Venue {
    Venue {
        id: VenueId::new(id),
        event_id: EventId::new("1"),
        name: name.into(),
        location: "Jaipur, Rajasthan".into(),
        description: description.into(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        images: vec![image.into()],
    }
}

/// The agent-curated venue catalog for the wedding.
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(
            "cv-1",
            "The Grand Palace",
            "A luxurious heritage hotel with stunning Rajasthani architecture, \
             perfect for royal weddings and grand celebrations.",
            &[
                "Swimming Pool",
                "Spa & Wellness",
                "Banquet Hall",
                "Multi-Cuisine Restaurant",
                "Valet Parking",
                "Free WiFi",
            ],
            "/hotel-grand-palace.png",
        ),
        venue(
            "cv-2",
            "Royal Heritage",
            "Experience the grandeur of Rajputana hospitality in this \
             magnificent palace hotel with world-class amenities.",
            &[
                "Rooftop Restaurant",
                "Gym",
                "Conference Rooms",
                "Garden Lawn",
                "Airport Shuttle",
                "Concierge Service",
            ],
            "/hotel-royal-heritage.png",
        ),
        venue(
            "cv-3",
            "Lakeside Retreat",
            "A serene lakeside property offering breathtaking views and \
             modern comfort for an unforgettable stay.",
            &[
                "Lake View Rooms",
                "Boat Rides",
                "Outdoor Pool",
                "Kids Play Area",
                "Yoga Studio",
                "24/7 Room Service",
            ],
            "/hotel-lakeside-retreat.png",
        ),
        venue(
            "cv-4",
            "City Center Plaza",
            "Contemporary luxury in the heart of the city with easy access \
             to shopping and cultural attractions.",
            &[
                "Business Center",
                "Rooftop Bar",
                "Fitness Center",
                "Shopping Arcade",
                "Multi-Cuisine Dining",
                "Parking",
            ],
            "/hotel-city-center.png",
        ),
    ]
}

/// A ready-made seed for the wedding's workspace: the bride's-family
/// block under head guest `hg-123`.
pub fn sample_seed() -> WorkspaceSeed {
    WorkspaceSeed {
        head_guest_id: HeadGuestId::new("hg-123"),
        guests: sample_guests(),
        allocations: sample_allocations(),
        groups: sample_groups(),
        venues: sample_venues(),
    }
}
