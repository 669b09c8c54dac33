//! Unified error type for the Guestdeck portal.

use guestdeck_allocation::AllocationError;
use guestdeck_model::{EventId, ModelError};
use guestdeck_roster::RosterError;

use crate::DirectoryError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `guestdeck` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum GuestdeckError {
    /// A model-level error (invalid record data).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An allocation-level error (capacity, stale lookups, drag state).
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// A roster-level error (unknown guest, invalid draft).
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A backend-boundary error (directory unreachable or refusing).
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The event id is not in the portal's current event list.
    #[error("event {0} not found")]
    UnknownEvent(EventId),

    /// No workspace has been opened for this event yet.
    #[error("no workspace open for event {0}")]
    WorkspaceNotOpen(EventId),
}
