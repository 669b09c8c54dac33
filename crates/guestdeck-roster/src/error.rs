//! Error types for the roster layer.

use guestdeck_model::GuestId;

/// Errors that can occur while managing the guest roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// No guest record exists for the given id. This happens when a view
    /// holds onto a stale id after a removal.
    #[error("guest {0} not found")]
    NotFound(GuestId),

    /// A guest record needs a non-empty display name.
    #[error("guest name must not be empty")]
    EmptyName,
}
