//! Domain model for Guestdeck.
//!
//! This crate defines the "vocabulary" every other layer speaks:
//!
//! - **Identifiers** ([`EventId`], [`GuestId`], [`AllocationId`], [`GroupId`],
//!   etc.) — typed wrappers over the string ids the backend hands out.
//! - **Entities** ([`Guest`], [`RoomAllocation`], [`RoomGroup`], [`Event`],
//!   [`Venue`]) — the records that travel between the portal and the
//!   backend as JSON.
//! - **Errors** ([`ModelError`]) — what can go wrong constructing them.
//!
//! # Architecture
//!
//! The model layer sits below everything else. It doesn't know about
//! rosters, boards, or the backend — it only knows what the data looks
//! like and which shapes are valid.
//!
//! ```text
//! Portal (owner) → Allocation / Roster (behavior) → Model (data)
//! ```

mod error;
mod event;
mod guest;
mod ids;
mod room;
mod venue;

pub use error::ModelError;
pub use event::{Event, EventStatus, InventoryRisk, RISK_HIGH_PCT, RISK_MEDIUM_PCT};
pub use guest::{Guest, HeadGuest};
pub use ids::{AllocationId, EventId, GroupId, GuestId, HeadGuestId, VenueId};
pub use room::{RoomAllocation, RoomGroup};
pub use venue::Venue;
