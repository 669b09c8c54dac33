//! Room allocation management for Guestdeck.
//!
//! This crate owns the one genuinely stateful interaction in the portal:
//! placing guests into capacity-limited rooms by drag and drop.
//!
//! # Key types
//!
//! - [`AllocationBoard`] — owns the groups, enforces capacity, publishes
//!   replace-all updates to its owner
//! - [`DragState`] — the explicit drag-and-drop state machine
//! - [`RoomFilter`] / [`BoardPartition`] — the filterable available/filled view
//! - [`AllocationError`] — what can go wrong (capacity first among them)

mod board;
mod drag;
mod error;

pub use board::{AllocationBoard, AssignOutcome, BoardPartition, GroupSender, RoomFilter};
pub use drag::DragState;
pub use error::AllocationError;
