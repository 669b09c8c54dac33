//! The allocation board: who sleeps in which room.
//!
//! The board owns the room-group collection for one event workspace and
//! enforces its two load-bearing invariants on every mutation:
//!
//! - a room's occupancy never exceeds its allocation's capacity (checked
//!   *before* mutating, never repaired after), and
//! - a guest occupies at most one room at a time (group membership is the
//!   single source of truth; "which room is this guest in" is answered by
//!   lookup, never by a stored back-reference that could drift).
//!
//! Every completed mutation publishes the complete group collection to all
//! subscribers — replace-all semantics, one batched update per operation,
//! mirroring how the owner persists it.

use guestdeck_model::{
    AllocationId, GroupId, Guest, GuestId, RoomAllocation, RoomGroup,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::{AllocationError, DragState};

/// Channel sender for delivering group-collection snapshots to an owner.
pub type GroupSender = mpsc::UnboundedSender<Vec<RoomGroup>>;

/// The active room-type filter. `All` is the sentinel that passes every
/// allocation through unfiltered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomFilter {
    #[default]
    All,
    RoomType(String),
}

impl RoomFilter {
    fn admits(&self, allocation: &RoomAllocation) -> bool {
        match self {
            Self::All => true,
            Self::RoomType(room_type) => allocation.room_type == *room_type,
        }
    }
}

/// The filtered allocations, split into the two sections the organizer
/// sees. Both sides preserve the supply order of the allocation list —
/// partitioned, never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPartition {
    /// Rooms that can accept more guests — including fully empty ones.
    pub available: Vec<RoomAllocation>,
    /// Rooms at or above capacity.
    pub filled: Vec<RoomAllocation>,
}

/// What a successful assignment did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignOutcome {
    /// The group the guest now belongs to.
    pub group_id: GroupId,
    /// Whether that group was created by this drop (lazy creation).
    pub created_group: bool,
    /// The group's occupancy after the assignment.
    pub occupancy: u32,
}

/// Sum of member sizes for one group against a roster snapshot.
///
/// Member ids that don't resolve to a known guest contribute nothing —
/// the seat math can only count people it can see.
fn occupancy_of(group: &RoomGroup, guests: &[Guest]) -> u32 {
    group
        .guest_ids
        .iter()
        .filter_map(|id| guests.iter().find(|guest| &guest.id == id))
        .map(Guest::size)
        .sum()
}

/// The room allocation manager for one event workspace.
///
/// Owns the group collection plus the two pieces of transient interaction
/// state (the active drag, the room-type filter). Allocations are
/// read-only; the guest roster is a snapshot the owner refreshes via
/// [`sync_guests`](Self::sync_guests) whenever the roster changes.
pub struct AllocationBoard {
    allocations: Vec<RoomAllocation>,
    groups: Vec<RoomGroup>,
    guests: Vec<Guest>,
    drag: DragState,
    filter: RoomFilter,
    subscribers: Vec<GroupSender>,
}

impl AllocationBoard {
    /// Builds a board over the supplied state, validating it first.
    ///
    /// # Errors
    /// Returns [`AllocationError::Inconsistent`] when the supplied groups
    /// violate a board invariant: a group referencing an unknown
    /// allocation, two groups on one allocation, a guest in two groups
    /// (or twice in one), or a room already over capacity.
    pub fn new(
        allocations: Vec<RoomAllocation>,
        groups: Vec<RoomGroup>,
        guests: Vec<Guest>,
    ) -> Result<Self, AllocationError> {
        let mut seen_allocations: Vec<&AllocationId> = Vec::new();
        let mut seen_guests: Vec<&GuestId> = Vec::new();

        for group in &groups {
            let allocation = allocations
                .iter()
                .find(|a| a.id == group.allocation_id)
                .ok_or_else(|| {
                    AllocationError::Inconsistent(format!(
                        "group {} references unknown allocation {}",
                        group.id, group.allocation_id
                    ))
                })?;

            if seen_allocations.contains(&&group.allocation_id) {
                return Err(AllocationError::Inconsistent(format!(
                    "allocation {} has more than one group",
                    group.allocation_id
                )));
            }
            seen_allocations.push(&group.allocation_id);

            for guest_id in &group.guest_ids {
                if seen_guests.contains(&guest_id) {
                    return Err(AllocationError::Inconsistent(format!(
                        "guest {guest_id} appears in more than one room"
                    )));
                }
                seen_guests.push(guest_id);
            }

            let occupancy = occupancy_of(group, &guests);
            if occupancy > allocation.max_capacity {
                return Err(AllocationError::Inconsistent(format!(
                    "group {} holds {} occupants but allocation {} caps at {}",
                    group.id, occupancy, allocation.id, allocation.max_capacity
                )));
            }
        }

        Ok(Self {
            allocations,
            groups,
            guests,
            drag: DragState::default(),
            filter: RoomFilter::default(),
            subscribers: Vec::new(),
        })
    }

    /// Registers an owner to receive the full group collection after
    /// every completed assignment or removal.
    pub fn subscribe(&mut self, sender: GroupSender) {
        self.subscribers.push(sender);
    }

    /// Replaces the roster snapshot the occupancy math reads.
    ///
    /// Call after any roster mutation; the board never re-fetches guests
    /// on its own.
    pub fn sync_guests(&mut self, guests: Vec<Guest>) {
        self.guests = guests;
    }

    // -- Read side ---------------------------------------------------------

    /// The allocations this board was mounted with, in supply order.
    pub fn allocations(&self) -> &[RoomAllocation] {
        &self.allocations
    }

    /// The current group collection.
    pub fn groups(&self) -> &[RoomGroup] {
        &self.groups
    }

    /// The group currently bound to an allocation, if one exists yet.
    /// At most one match by invariant.
    pub fn group_for(&self, allocation_id: &AllocationId) -> Option<&RoomGroup> {
        self.groups.iter().find(|g| &g.allocation_id == allocation_id)
    }

    /// Occupancy of a group: the sum of its members' sizes. Returns 0 for
    /// an unknown group or one with no members. Pure; no side effects.
    pub fn occupancy(&self, group_id: &GroupId) -> u32 {
        self.groups
            .iter()
            .find(|g| &g.id == group_id)
            .map(|g| occupancy_of(g, &self.guests))
            .unwrap_or(0)
    }

    /// The room a guest is currently placed in, derived from group
    /// membership. `None` means unassigned.
    pub fn assignment_of(&self, guest_id: &GuestId) -> Option<&GroupId> {
        self.groups
            .iter()
            .find(|g| g.contains(guest_id))
            .map(|g| &g.id)
    }

    /// Guests with no room yet, in roster order.
    pub fn unassigned(&self) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|guest| self.assignment_of(&guest.id).is_none())
            .collect()
    }

    /// Distinct room types in supply order. The UI prepends the
    /// [`RoomFilter::All`] sentinel; see [`filter_options`](Self::filter_options).
    pub fn room_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for allocation in &self.allocations {
            if !types.contains(&allocation.room_type) {
                types.push(allocation.room_type.clone());
            }
        }
        types
    }

    /// The selectable filter values: `All`, then one per distinct room type.
    pub fn filter_options(&self) -> Vec<RoomFilter> {
        std::iter::once(RoomFilter::All)
            .chain(self.room_types().into_iter().map(RoomFilter::RoomType))
            .collect()
    }

    /// The active room-type filter.
    pub fn filter(&self) -> &RoomFilter {
        &self.filter
    }

    /// Selects the room-type filter applied by [`partition`](Self::partition).
    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.filter = filter;
    }

    /// Splits the filtered allocations into available vs filled.
    ///
    /// A room is *filled* once its occupancy reaches capacity (`>=`);
    /// everything below that — including completely empty rooms — is
    /// *available*, meaning it can accept more guests. Supply order is
    /// preserved on both sides.
    pub fn partition(&self) -> BoardPartition {
        let mut available = Vec::new();
        let mut filled = Vec::new();

        for allocation in &self.allocations {
            if !self.filter.admits(allocation) {
                continue;
            }
            let occupancy = self
                .group_for(&allocation.id)
                .map(|g| occupancy_of(g, &self.guests))
                .unwrap_or(0);

            if occupancy >= allocation.max_capacity {
                filled.push(allocation.clone());
            } else {
                available.push(allocation.clone());
            }
        }

        BoardPartition { available, filled }
    }

    /// The current drag interaction state.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    // -- Interaction side --------------------------------------------------

    /// Records a guest card being picked up. No validation happens here —
    /// any guest, assigned or not, may be re-dragged.
    pub fn begin_drag(&mut self, guest_id: GuestId) {
        tracing::debug!(%guest_id, "drag started");
        self.drag.begin(guest_id);
    }

    /// A drop outside any room: the interaction ends with no effect.
    pub fn cancel_drag(&mut self) {
        tracing::debug!("drag cancelled");
        self.drag.settle();
    }

    /// Resolves the active drag against a target allocation.
    ///
    /// This is the capacity-gated assignment protocol: resolve the target,
    /// gate on remaining capacity, evict the guest from any prior room (a
    /// guest never occupies two), append to the target's group — creating
    /// it on first drop — and publish one batched update. The drag state
    /// returns to idle on every path, accept or reject.
    ///
    /// # Errors
    /// - [`AllocationError::NoActiveDrag`] — nothing was being dragged.
    /// - [`AllocationError::AllocationNotFound`] / [`AllocationError::GuestNotFound`]
    ///   — stale references; nothing is mutated.
    /// - [`AllocationError::CapacityExceeded`] — the drop would overfill
    ///   the room; nothing is mutated and the error names the capacity,
    ///   the guest's size, and the remaining space.
    pub fn attempt_assign(
        &mut self,
        allocation_id: &AllocationId,
    ) -> Result<AssignOutcome, AllocationError> {
        let Some(guest_id) = self.drag.resolve(allocation_id.clone()) else {
            return Err(AllocationError::NoActiveDrag);
        };

        let result = self.place(guest_id, allocation_id);
        self.drag.settle();

        if result.is_ok() {
            self.publish();
        }
        result
    }

    /// The assignment body, separated so `attempt_assign` can settle the
    /// drag state on every exit path.
    fn place(
        &mut self,
        guest_id: GuestId,
        allocation_id: &AllocationId,
    ) -> Result<AssignOutcome, AllocationError> {
        let max_capacity = self
            .allocations
            .iter()
            .find(|a| &a.id == allocation_id)
            .map(|a| a.max_capacity)
            .ok_or_else(|| AllocationError::AllocationNotFound(allocation_id.clone()))?;

        let guest_size = self
            .guests
            .iter()
            .find(|g| g.id == guest_id)
            .map(Guest::size)
            .ok_or_else(|| AllocationError::GuestNotFound(guest_id.clone()))?;

        let (target_group, already_member, current_occupancy) =
            match self.group_for(allocation_id) {
                Some(group) => (
                    Some(group.id.clone()),
                    group.contains(&guest_id),
                    occupancy_of(group, &self.guests),
                ),
                None => (None, false, 0),
            };

        // Re-dropping a guest onto their own room changes nothing; net
        // occupancy is unchanged, so the capacity gate is vacuous.
        if already_member {
            let group_id = target_group.expect("membership implies a group");
            tracing::debug!(%guest_id, %group_id, "guest already in target room");
            return Ok(AssignOutcome {
                group_id,
                created_group: false,
                occupancy: current_occupancy,
            });
        }

        // The gate uses `>` (exactly-at-capacity is allowed) while the
        // partition labels rooms filled at `>=`; an at-capacity room is
        // "filled" precisely because any further guest_size >= 1 trips this.
        if current_occupancy + guest_size > max_capacity {
            tracing::info!(
                %guest_id,
                %allocation_id,
                max_capacity,
                guest_size,
                remaining = max_capacity - current_occupancy,
                "assignment rejected: over capacity"
            );
            return Err(AllocationError::CapacityExceeded {
                allocation_id: allocation_id.clone(),
                max_capacity,
                guest_size,
                remaining: max_capacity - current_occupancy,
            });
        }

        // Eviction from any prior room is implicit in a move.
        self.evict(&guest_id);

        let outcome = match self
            .groups
            .iter_mut()
            .find(|g| &g.allocation_id == allocation_id)
        {
            Some(group) => {
                group.guest_ids.push(guest_id.clone());
                AssignOutcome {
                    group_id: group.id.clone(),
                    created_group: false,
                    occupancy: current_occupancy + guest_size,
                }
            }
            None => {
                let group =
                    RoomGroup::for_allocation(allocation_id.clone(), guest_id.clone());
                let group_id = group.id.clone();
                self.groups.push(group);
                AssignOutcome {
                    group_id,
                    created_group: true,
                    occupancy: guest_size,
                }
            }
        };

        tracing::info!(
            %guest_id,
            %allocation_id,
            group_id = %outcome.group_id,
            created = outcome.created_group,
            occupancy = outcome.occupancy,
            "guest assigned"
        );
        Ok(outcome)
    }

    /// Removes a guest from the named group.
    ///
    /// Removal only lowers occupancy, so there is no capacity gate.
    /// Removing a guest who isn't a member is an idempotent success; the
    /// group itself must exist. An emptied group persists, still bound to
    /// its allocation, label and all.
    ///
    /// # Errors
    /// Returns [`AllocationError::GroupNotFound`] for an unknown group.
    pub fn remove_guest(
        &mut self,
        guest_id: &GuestId,
        group_id: &GroupId,
    ) -> Result<(), AllocationError> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| &g.id == group_id)
            .ok_or_else(|| AllocationError::GroupNotFound(group_id.clone()))?;

        let before = group.guest_ids.len();
        group.guest_ids.retain(|id| id != guest_id);

        if group.guest_ids.len() < before {
            tracing::info!(%guest_id, %group_id, "guest removed from room");
        } else {
            tracing::debug!(%guest_id, %group_id, "guest was not a member; nothing removed");
        }

        self.publish();
        Ok(())
    }

    /// Evicts a guest from whichever room currently holds them, if any.
    ///
    /// Used when a guest record is deleted outright. Publishes only when
    /// something actually changed. Returns whether it did.
    pub fn release_guest(&mut self, guest_id: &GuestId) -> bool {
        let changed = self.evict(guest_id);
        if changed {
            self.publish();
        }
        changed
    }

    /// Drops a guest's membership without publishing. Returns whether a
    /// membership was removed.
    fn evict(&mut self, guest_id: &GuestId) -> bool {
        for group in &mut self.groups {
            let before = group.guest_ids.len();
            group.guest_ids.retain(|id| id != guest_id);
            if group.guest_ids.len() < before {
                tracing::debug!(%guest_id, group_id = %group.id, "guest evicted from prior room");
                return true;
            }
        }
        false
    }

    /// Sends the complete group collection to every subscriber. Closed
    /// receivers are pruned silently.
    fn publish(&mut self) {
        let groups = &self.groups;
        self.subscribers
            .retain(|sender| sender.send(groups.clone()).is_ok());
    }
}
