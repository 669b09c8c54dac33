//! The guest roster: the collaborator that owns guest records.
//!
//! The roster is the single owner of the guest list for one head guest's
//! portal. Everything else (the allocation board included) works from
//! snapshots it hands out. Destructive operations are gated on an explicit
//! [`Confirmation`] value — the caller's UI asks the question, this layer
//! refuses to act without the answer.

use std::collections::HashSet;

use guestdeck_model::{Guest, GuestId, HeadGuestId};

use crate::RosterError;

/// The answer to a "are you sure?" prompt, passed explicitly so that a
/// cancelled prompt provably leaves state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// What a confirmation-gated removal actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The prompt was cancelled; nothing changed.
    Cancelled,
    /// These guests were removed from the roster.
    Removed(Vec<GuestId>),
}

/// Editable fields for adding or updating a guest. The roster assigns
/// the id and the head-guest linkage itself.
#[derive(Debug, Clone)]
pub struct GuestDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    /// Total people in the party, the primary guest included. Zero is
    /// normalized to 1 — a party is never smaller than the guest.
    pub guest_count: u32,
}

impl GuestDraft {
    /// A draft with just a name; everything else at its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            age: None,
            guest_count: 1,
        }
    }
}

/// Owns the ordered guest list for one head guest, plus the transient
/// selection used by bulk actions.
pub struct GuestRoster {
    head_guest_id: HeadGuestId,
    guests: Vec<Guest>,
    selected: HashSet<GuestId>,
}

impl GuestRoster {
    /// Creates a roster over the initially supplied guests.
    pub fn new(head_guest_id: HeadGuestId, guests: Vec<Guest>) -> Self {
        Self {
            head_guest_id,
            guests,
            selected: HashSet::new(),
        }
    }

    /// The head guest this roster belongs to.
    pub fn head_guest_id(&self) -> &HeadGuestId {
        &self.head_guest_id
    }

    /// All guests, in roster order.
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Looks up one guest by id.
    pub fn get(&self, id: &GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| &g.id == id)
    }

    /// Number of guest records (not people — see [`Guest::size`]).
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// Returns `true` if the roster has no guests.
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    // -- CRUD --------------------------------------------------------------

    /// Adds a new guest from a draft, minting a fresh id.
    ///
    /// # Errors
    /// Returns [`RosterError::EmptyName`] if the draft's name is blank.
    pub fn add(&mut self, draft: GuestDraft) -> Result<&Guest, RosterError> {
        if draft.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        let guest = Guest {
            id: GuestId::generate(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            age: draft.age,
            guest_count: draft.guest_count.max(1),
            head_guest_id: self.head_guest_id.clone(),
        };
        tracing::info!(guest_id = %guest.id, "guest added to roster");
        self.guests.push(guest);

        Ok(self.guests.last().expect("just pushed"))
    }

    /// Overwrites an existing guest's editable fields with a draft.
    ///
    /// # Errors
    /// - [`RosterError::EmptyName`] — the draft's name is blank
    /// - [`RosterError::NotFound`] — no guest with this id
    pub fn update(
        &mut self,
        id: &GuestId,
        draft: GuestDraft,
    ) -> Result<&Guest, RosterError> {
        if draft.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        let guest = self
            .guests
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))?;

        guest.name = draft.name;
        guest.email = draft.email;
        guest.phone = draft.phone;
        guest.age = draft.age;
        guest.guest_count = draft.guest_count.max(1);

        tracing::info!(guest_id = %id, "guest updated");
        Ok(guest)
    }

    /// Removes a single guest, gated on confirmation.
    ///
    /// Cancellation returns [`RemovalOutcome::Cancelled`] and touches
    /// nothing — not even the existence check runs.
    ///
    /// # Errors
    /// Returns [`RosterError::NotFound`] when confirmed but the id is
    /// unknown.
    pub fn remove(
        &mut self,
        id: &GuestId,
        confirmation: Confirmation,
    ) -> Result<RemovalOutcome, RosterError> {
        if confirmation == Confirmation::Cancelled {
            return Ok(RemovalOutcome::Cancelled);
        }

        let before = self.guests.len();
        self.guests.retain(|g| &g.id != id);
        if self.guests.len() == before {
            return Err(RosterError::NotFound(id.clone()));
        }

        self.selected.remove(id);
        tracing::info!(guest_id = %id, "guest removed from roster");
        Ok(RemovalOutcome::Removed(vec![id.clone()]))
    }

    /// Removes every selected guest, gated on confirmation. Clears the
    /// selection either way on confirm; cancellation touches nothing.
    pub fn remove_selected(&mut self, confirmation: Confirmation) -> RemovalOutcome {
        if confirmation == Confirmation::Cancelled {
            return RemovalOutcome::Cancelled;
        }

        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::new();
        self.guests.retain(|g| {
            if selected.contains(&g.id) {
                removed.push(g.id.clone());
                false
            } else {
                true
            }
        });

        tracing::info!(count = removed.len(), "bulk removal from roster");
        RemovalOutcome::Removed(removed)
    }

    // -- Search and selection ----------------------------------------------

    /// Case-insensitive substring search over name and email. A blank
    /// query matches everyone. Results stay in roster order.
    pub fn search(&self, query: &str) -> Vec<&Guest> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.guests.iter().collect();
        }

        self.guests
            .iter()
            .filter(|guest| {
                guest.name.to_lowercase().contains(&needle)
                    || guest
                        .email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Flips one guest's selection. Returns the new selection state.
    ///
    /// # Errors
    /// Returns [`RosterError::NotFound`] for an unknown id.
    pub fn toggle_select(&mut self, id: &GuestId) -> Result<bool, RosterError> {
        if self.get(id).is_none() {
            return Err(RosterError::NotFound(id.clone()));
        }
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.clone());
            Ok(true)
        }
    }

    /// The header-checkbox behavior: if every guest matching the query is
    /// already selected, clear the selection; otherwise select exactly
    /// the matches.
    pub fn toggle_select_all(&mut self, query: &str) {
        let matches: HashSet<GuestId> =
            self.search(query).iter().map(|g| g.id.clone()).collect();

        let all_selected =
            !matches.is_empty() && matches.iter().all(|id| self.selected.contains(id));

        if all_selected {
            self.selected.clear();
        } else {
            self.selected = matches;
        }
    }

    /// Whether a guest is currently selected.
    pub fn is_selected(&self, id: &GuestId) -> bool {
        self.selected.contains(id)
    }

    /// Number of currently selected guests.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
