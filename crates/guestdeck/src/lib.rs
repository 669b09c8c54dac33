//! # Guestdeck
//!
//! Event guest and room-allocation portal engine.
//!
//! Guestdeck provides the state management behind a group-logistics portal:
//! an organizer's event list, per-event guest rosters, and capacity-gated
//! room allocation with drag-and-drop semantics. The embedding application
//! supplies rendering and transport; Guestdeck supplies the rules.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use guestdeck::prelude::*;
//! use guestdeck::sample;
//!
//! # async fn run() -> Result<(), GuestdeckError> {
//! let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
//! portal.refresh_events().await?;
//!
//! let wedding = EventId::new("1");
//! portal.open_workspace(&wedding, sample::sample_seed()).await?;
//!
//! portal
//!     .with_workspace(&wedding, |ws| {
//!         ws.assign(GuestId::new("sg-6"), &AllocationId::new("ra-3"))
//!     })
//!     .await??;
//! # Ok(())
//! # }
//! ```

mod directory;
mod error;
mod portal;
pub mod sample;

pub use directory::{DirectoryError, EventDirectory, StaticDirectory};
pub use error::GuestdeckError;
pub use portal::{EventWorkspace, Portal, PortalBuilder, WorkspaceSeed};

/// The common imports for working with a portal.
pub mod prelude {
    pub use crate::{
        DirectoryError, EventDirectory, EventWorkspace, GuestdeckError, Portal,
        PortalBuilder, StaticDirectory, WorkspaceSeed,
    };
    pub use guestdeck_allocation::{
        AllocationBoard, AllocationError, AssignOutcome, BoardPartition, DragState,
        RoomFilter,
    };
    pub use guestdeck_model::{
        AllocationId, Event, EventId, EventStatus, GroupId, Guest, GuestId,
        HeadGuest, HeadGuestId, InventoryRisk, RoomAllocation, RoomGroup, Venue,
        VenueId,
    };
    pub use guestdeck_roster::{
        Confirmation, GuestDraft, GuestRoster, RemovalOutcome, RosterError,
    };
}
