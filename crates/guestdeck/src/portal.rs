//! The portal: the owning context that ties the collaborators together.
//!
//! A [`Portal`] holds the organizer's event list (refreshed through the
//! [`EventDirectory`] boundary) and one [`EventWorkspace`] per event being
//! actively managed. The workspace is where consistency lives: the guest
//! roster and the allocation board each own their half of the state, and
//! every cross-cutting operation (deleting a guest who has a room, editing
//! a party size) goes through the workspace so both halves move together.
//!
//! State sits behind a single `tokio::sync::Mutex`: one interaction is
//! processed at a time, runs to completion, and every mutation is atomic
//! from the caller's perspective.

use std::collections::HashMap;

use guestdeck_allocation::{
    AllocationBoard, AssignOutcome, BoardPartition, RoomFilter,
};
use guestdeck_model::{
    AllocationId, Event, EventId, GroupId, Guest, GuestId, HeadGuestId,
    RoomAllocation, RoomGroup, Venue,
};
use guestdeck_roster::{
    export_csv, Confirmation, GuestDraft, GuestRoster, RemovalOutcome,
};
use tokio::sync::{mpsc, Mutex};

use crate::{EventDirectory, GuestdeckError};

/// Everything needed to mount a workspace for one event: the head guest
/// whose block is being managed, their guests, and the event's room
/// inventory. Supplied by the embedding application (typically fetched
/// alongside the event), sampled from [`crate::sample`] in development.
pub struct WorkspaceSeed {
    pub head_guest_id: HeadGuestId,
    pub guests: Vec<Guest>,
    pub allocations: Vec<RoomAllocation>,
    pub groups: Vec<RoomGroup>,
    pub venues: Vec<Venue>,
}

/// One event's management surface: roster + allocation board, kept
/// consistent with each other.
pub struct EventWorkspace {
    event_id: EventId,
    roster: GuestRoster,
    board: AllocationBoard,
    updates: mpsc::UnboundedReceiver<Vec<RoomGroup>>,
    published: Vec<RoomGroup>,
    venues: Vec<Venue>,
}

impl EventWorkspace {
    fn mount(event_id: EventId, seed: WorkspaceSeed) -> Result<Self, GuestdeckError> {
        let mut board =
            AllocationBoard::new(seed.allocations, seed.groups, seed.guests.clone())?;
        let (sender, updates) = mpsc::unbounded_channel();
        board.subscribe(sender);

        let published = board.groups().to_vec();
        let roster = GuestRoster::new(seed.head_guest_id, seed.guests);

        Ok(Self {
            event_id,
            roster,
            board,
            updates,
            published,
            venues: seed.venues,
        })
    }

    /// The event this workspace manages.
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Read access to the guest roster.
    pub fn roster(&self) -> &GuestRoster {
        &self.roster
    }

    /// Read access to the allocation board.
    pub fn board(&self) -> &AllocationBoard {
        &self.board
    }

    /// The curated venues for this event.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    // -- Guest operations (roster + board together) ------------------------

    /// Adds a guest and refreshes the board's roster snapshot.
    pub fn add_guest(&mut self, draft: GuestDraft) -> Result<GuestId, GuestdeckError> {
        let guest_id = self.roster.add(draft)?.id.clone();
        self.board.sync_guests(self.roster.guests().to_vec());
        Ok(guest_id)
    }

    /// Edits a guest. Party-size changes flow straight into occupancy
    /// math via the board sync.
    pub fn update_guest(
        &mut self,
        guest_id: &GuestId,
        draft: GuestDraft,
    ) -> Result<(), GuestdeckError> {
        self.roster.update(guest_id, draft)?;
        self.board.sync_guests(self.roster.guests().to_vec());
        Ok(())
    }

    /// Deletes a guest (confirmation-gated). A deleted guest also gives
    /// up their room seat, so no group is left pointing at a record that
    /// no longer exists.
    pub fn delete_guest(
        &mut self,
        guest_id: &GuestId,
        confirmation: Confirmation,
    ) -> Result<RemovalOutcome, GuestdeckError> {
        let outcome = self.roster.remove(guest_id, confirmation)?;
        self.apply_removal(&outcome);
        Ok(outcome)
    }

    /// Deletes every selected guest (confirmation-gated), releasing their
    /// room seats.
    pub fn delete_selected(&mut self, confirmation: Confirmation) -> RemovalOutcome {
        let outcome = self.roster.remove_selected(confirmation);
        self.apply_removal(&outcome);
        outcome
    }

    fn apply_removal(&mut self, outcome: &RemovalOutcome) {
        if let RemovalOutcome::Removed(ids) = outcome {
            for guest_id in ids {
                self.board.release_guest(guest_id);
            }
            self.board.sync_guests(self.roster.guests().to_vec());
        }
    }

    /// Flips a guest's selection.
    pub fn toggle_select(&mut self, guest_id: &GuestId) -> Result<bool, GuestdeckError> {
        Ok(self.roster.toggle_select(guest_id)?)
    }

    /// The header-checkbox behavior over the current search results.
    pub fn toggle_select_all(&mut self, query: &str) {
        self.roster.toggle_select_all(query);
    }

    // -- Allocation operations ---------------------------------------------

    /// Drags a guest and drops them on a room in one motion.
    pub fn assign(
        &mut self,
        guest_id: GuestId,
        allocation_id: &AllocationId,
    ) -> Result<AssignOutcome, GuestdeckError> {
        self.board.begin_drag(guest_id);
        Ok(self.board.attempt_assign(allocation_id)?)
    }

    /// Removes a guest from the named room group.
    pub fn remove_from_room(
        &mut self,
        guest_id: &GuestId,
        group_id: &GroupId,
    ) -> Result<(), GuestdeckError> {
        Ok(self.board.remove_guest(guest_id, group_id)?)
    }

    /// Selects the room-type filter for [`partition`](Self::partition).
    pub fn set_room_filter(&mut self, filter: RoomFilter) {
        self.board.set_filter(filter);
    }

    /// The filtered available/filled room view.
    pub fn partition(&self) -> BoardPartition {
        self.board.partition()
    }

    /// Guests without a room, in roster order.
    pub fn unassigned(&self) -> Vec<&Guest> {
        self.board.unassigned()
    }

    /// The latest group collection the board has published — the
    /// replace-all snapshot the embedding application would persist.
    /// Drains any queued updates first.
    pub fn published_groups(&mut self) -> &[RoomGroup] {
        while let Ok(snapshot) = self.updates.try_recv() {
            self.published = snapshot;
        }
        &self.published
    }

    /// The CSV handoff: roster order, room column resolved through the
    /// board's derived assignment.
    pub fn export_guest_csv(&self) -> String {
        export_csv(self.roster.guests(), |guest_id| {
            self.board.assignment_of(guest_id).cloned()
        })
    }
}

struct PortalState {
    events: Vec<Event>,
    workspaces: HashMap<EventId, EventWorkspace>,
}

/// Builder for configuring and creating a [`Portal`].
///
/// # Example
///
/// ```rust,no_run
/// use guestdeck::prelude::*;
/// use guestdeck::sample;
///
/// let portal = PortalBuilder::new()
///     .cached_events(sample::sample_events())
///     .build(StaticDirectory::new(sample::sample_events()));
/// ```
pub struct PortalBuilder {
    cached_events: Vec<Event>,
}

impl PortalBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            cached_events: Vec::new(),
        }
    }

    /// Seeds the cached event list, so workspaces can open before the
    /// first directory refresh (e.g. restoring a previous session's
    /// cache). A later [`Portal::refresh_events`] replaces it wholesale.
    pub fn cached_events(mut self, events: Vec<Event>) -> Self {
        self.cached_events = events;
        self
    }

    /// Builds the portal over the given directory.
    pub fn build<D: EventDirectory>(self, directory: D) -> Portal<D> {
        Portal {
            directory,
            state: Mutex::new(PortalState {
                events: self.cached_events,
                workspaces: HashMap::new(),
            }),
        }
    }
}

impl Default for PortalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The portal: owns the event list and the open workspaces.
///
/// Generic over the [`EventDirectory`] implementation so production and
/// development differ only in what gets plugged in here.
pub struct Portal<D: EventDirectory> {
    directory: D,
    state: Mutex<PortalState>,
}

impl<D: EventDirectory> Portal<D> {
    /// Creates a new builder.
    pub fn builder() -> PortalBuilder {
        PortalBuilder::new()
    }

    /// Creates a portal over the given directory with default settings.
    /// The event list starts empty; call
    /// [`refresh_events`](Self::refresh_events) to populate it.
    pub fn new(directory: D) -> Self {
        PortalBuilder::new().build(directory)
    }

    /// Fetches the event list from the directory and replaces the cached
    /// copy wholesale. Returns how many events came back.
    ///
    /// # Errors
    /// Propagates the directory's error; the previous event list is kept
    /// untouched on failure.
    pub async fn refresh_events(&self) -> Result<usize, GuestdeckError> {
        let events = self.directory.fetch_events().await?;
        let count = events.len();

        let mut state = self.state.lock().await;
        state.events = events;
        tracing::info!(count, "event list refreshed");
        Ok(count)
    }

    /// The cached event list.
    pub async fn events(&self) -> Vec<Event> {
        self.state.lock().await.events.clone()
    }

    /// Looks up one cached event.
    pub async fn event(&self, event_id: &EventId) -> Option<Event> {
        self.state
            .lock()
            .await
            .events
            .iter()
            .find(|e| &e.id == event_id)
            .cloned()
    }

    /// Mounts a workspace for an event in the cached list.
    ///
    /// # Errors
    /// - [`GuestdeckError::UnknownEvent`] — the event isn't in the list
    ///   (refresh first).
    /// - [`GuestdeckError::Allocation`] — the seed state is inconsistent.
    pub async fn open_workspace(
        &self,
        event_id: &EventId,
        seed: WorkspaceSeed,
    ) -> Result<(), GuestdeckError> {
        let mut state = self.state.lock().await;
        if !state.events.iter().any(|e| &e.id == event_id) {
            return Err(GuestdeckError::UnknownEvent(event_id.clone()));
        }

        let workspace = EventWorkspace::mount(event_id.clone(), seed)?;
        state.workspaces.insert(event_id.clone(), workspace);
        tracing::info!(%event_id, "workspace opened");
        Ok(())
    }

    /// Runs a closure against an open workspace. All workspace mutations
    /// go through here, which is what serializes interactions.
    ///
    /// # Errors
    /// Returns [`GuestdeckError::WorkspaceNotOpen`] if no workspace exists
    /// for the event.
    pub async fn with_workspace<T>(
        &self,
        event_id: &EventId,
        f: impl FnOnce(&mut EventWorkspace) -> T,
    ) -> Result<T, GuestdeckError> {
        let mut state = self.state.lock().await;
        let workspace = state
            .workspaces
            .get_mut(event_id)
            .ok_or_else(|| GuestdeckError::WorkspaceNotOpen(event_id.clone()))?;
        Ok(f(workspace))
    }

    /// Drops an event's workspace, discarding its transient state.
    ///
    /// # Errors
    /// Returns [`GuestdeckError::WorkspaceNotOpen`] if none was open.
    pub async fn close_workspace(&self, event_id: &EventId) -> Result<(), GuestdeckError> {
        let mut state = self.state.lock().await;
        state
            .workspaces
            .remove(event_id)
            .ok_or_else(|| GuestdeckError::WorkspaceNotOpen(event_id.clone()))?;
        tracing::info!(%event_id, "workspace closed");
        Ok(())
    }
}
