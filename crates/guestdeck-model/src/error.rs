//! Error types for the model layer.
//!
//! Each crate in Guestdeck defines its own error enum. This keeps errors
//! specific and meaningful — a `ModelError` always means a record was
//! constructed with invalid data, not that a lookup or an assignment
//! failed somewhere above.

/// Errors that can occur when constructing model records.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A guest record needs a non-empty display name.
    #[error("guest name must not be empty")]
    EmptyGuestName,

    /// A room allocation with zero capacity could never hold anyone;
    /// the backend must not hand one out and we refuse to build one.
    #[error("room capacity must be greater than zero")]
    ZeroCapacity,
}
