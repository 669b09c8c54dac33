//! Guest roster management for Guestdeck.
//!
//! This crate is the guest-list collaborator: it owns guest records and
//! everything an organizer does to them directly —
//!
//! 1. **CRUD** — add, edit, and (with explicit confirmation) remove guests
//! 2. **Search and selection** — the filterable, bulk-actionable list view
//! 3. **Export** — the CSV handoff, with room assignments resolved through
//!    a caller-supplied lookup
//!
//! Room placement lives elsewhere: the allocation board reads snapshots of
//! this roster but never owns the records.

mod error;
mod export;
mod roster;

pub use error::RosterError;
pub use export::{export_csv, CSV_HEADER};
pub use roster::{Confirmation, GuestDraft, GuestRoster, RemovalOutcome};
