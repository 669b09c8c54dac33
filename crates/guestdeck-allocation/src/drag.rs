//! The drag-and-drop state machine.
//!
//! Dragging is the one piece of transient interaction state the board
//! owns. Making it an explicit machine keeps the transitions auditable:
//!
//! ```text
//!   Idle ──(begin)──→ Dragging ──(resolve)──→ Resolving ──(settle)──→ Idle
//!     ↑                   │
//!     └─────(settle)──────┘        (drop outside any room)
//! ```
//!
//! `Resolving` always terminates back to `Idle` — whether the drop was
//! accepted or rejected, the next interaction starts from a clean slate.

use guestdeck_model::{AllocationId, GuestId};

/// Where the current drag interaction stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,

    /// A guest card has been picked up. Any guest, assigned or not, may
    /// be dragged — validation happens at resolution time.
    Dragging(GuestId),

    /// The guest has been dropped on a room and the board is deciding
    /// the outcome. Synchronous and short-lived.
    Resolving {
        guest: GuestId,
        target: AllocationId,
    },
}

impl DragState {
    /// Picks up a guest card. Starting a new drag replaces any previous
    /// one — the UI can only ever drag one card at a time.
    pub fn begin(&mut self, guest: GuestId) {
        *self = Self::Dragging(guest);
    }

    /// Moves `Dragging` into `Resolving` against the given target,
    /// returning the dragged guest. Returns `None` (and stays put) when
    /// no drag is in progress — a drop event with nothing picked up.
    pub fn resolve(&mut self, target: AllocationId) -> Option<GuestId> {
        match std::mem::take(self) {
            Self::Dragging(guest) => {
                *self = Self::Resolving {
                    guest: guest.clone(),
                    target,
                };
                Some(guest)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Terminates the interaction and returns to `Idle`. Called after
    /// resolution (accept or reject) and on a drop outside any room.
    pub fn settle(&mut self) {
        *self = Self::Idle;
    }

    /// The guest currently being dragged, if any.
    pub fn dragging(&self) -> Option<&GuestId> {
        match self {
            Self::Dragging(guest) => Some(guest),
            _ => None,
        }
    }

    /// Returns `true` when no interaction is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
