//! Error types for the allocation layer.

use guestdeck_model::{AllocationId, GroupId, GuestId};

/// Errors that can occur during allocation-board operations.
///
/// Missing-id lookups are real errors here, not silent no-ops: a stale
/// reference means the caller's view of the board has drifted, and tests
/// (and callers) should be able to assert on that directly.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The target room allocation does not exist on this board.
    #[error("room allocation {0} not found")]
    AllocationNotFound(AllocationId),

    /// The named room group does not exist on this board.
    #[error("room group {0} not found")]
    GroupNotFound(GroupId),

    /// The dragged guest is not in the board's roster snapshot.
    #[error("guest {0} not found")]
    GuestNotFound(GuestId),

    /// An assignment was attempted while no drag was in progress.
    #[error("no guest is being dragged")]
    NoActiveDrag,

    /// The drop would push the room above its capacity. Nothing was
    /// mutated; the message names everything the organizer needs to pick
    /// a different room.
    #[error(
        "cannot assign guest to {allocation_id}: room capacity {max_capacity}, \
         guest size {guest_size}, remaining {remaining}"
    )]
    CapacityExceeded {
        allocation_id: AllocationId,
        max_capacity: u32,
        guest_size: u32,
        remaining: u32,
    },

    /// The state supplied at construction violates a board invariant
    /// (two groups on one allocation, a guest in two rooms, a room
    /// already over capacity, ...).
    #[error("inconsistent board state: {0}")]
    Inconsistent(String),
}
