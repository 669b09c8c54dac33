//! Integration tests for the portal facade, driven by the sample dataset.

use guestdeck::prelude::*;
use guestdeck::sample;

fn wedding() -> EventId {
    EventId::new("1")
}

fn gid(id: &str) -> GuestId {
    GuestId::new(id)
}

fn aid(id: &str) -> AllocationId {
    AllocationId::new(id)
}

/// A portal with the sample events loaded and the wedding workspace open.
async fn open_portal() -> Portal<StaticDirectory> {
    let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
    portal.refresh_events().await.unwrap();
    portal
        .open_workspace(&wedding(), sample::sample_seed())
        .await
        .unwrap();
    portal
}

// =========================================================================
// Event directory boundary
// =========================================================================

#[tokio::test]
async fn test_refresh_events_replaces_the_cached_list() {
    let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
    assert!(portal.events().await.is_empty());

    let count = portal.refresh_events().await.unwrap();

    assert_eq!(count, 3);
    let events = portal.events().await;
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].name, "Ananya & Rahul Wedding");
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_list() {
    let portal = Portal::new(StaticDirectory::unavailable("connection refused"));

    let result = portal.refresh_events().await;

    assert!(matches!(result, Err(GuestdeckError::Directory(_))));
    assert!(portal.events().await.is_empty());
}

#[tokio::test]
async fn test_builder_seeds_the_cached_event_list() {
    // A seeded cache lets a workspace open before the first refresh.
    let portal = PortalBuilder::new()
        .cached_events(sample::sample_events())
        .build(StaticDirectory::unavailable("offline"));

    assert_eq!(portal.events().await.len(), 3);
    portal
        .open_workspace(&wedding(), sample::sample_seed())
        .await
        .unwrap();

    // The directory is down, but the cached list survives the failure.
    assert!(portal.refresh_events().await.is_err());
    assert_eq!(portal.events().await.len(), 3);
}

#[tokio::test]
async fn test_event_lookup() {
    let portal = open_portal().await;

    let event = portal.event(&wedding()).await.expect("wedding is cached");
    assert_eq!(event.location, "Jaipur");
    assert_eq!(event.inventory_risk(), InventoryRisk::Medium);

    assert!(portal.event(&EventId::new("404")).await.is_none());
}

// =========================================================================
// Workspace lifecycle
// =========================================================================

#[tokio::test]
async fn test_open_workspace_requires_known_event() {
    let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
    // No refresh: the cached list is empty, so the event is unknown.
    let result = portal
        .open_workspace(&wedding(), sample::sample_seed())
        .await;
    assert!(matches!(result, Err(GuestdeckError::UnknownEvent(_))));
}

#[tokio::test]
async fn test_with_workspace_requires_open_workspace() {
    let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
    portal.refresh_events().await.unwrap();

    let result = portal.with_workspace(&wedding(), |_| ()).await;

    assert!(matches!(result, Err(GuestdeckError::WorkspaceNotOpen(_))));
}

#[tokio::test]
async fn test_close_workspace_discards_it() {
    let portal = open_portal().await;

    portal.close_workspace(&wedding()).await.unwrap();

    let result = portal.with_workspace(&wedding(), |_| ()).await;
    assert!(matches!(result, Err(GuestdeckError::WorkspaceNotOpen(_))));
}

#[tokio::test]
async fn test_sample_seed_mounts_consistently() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            assert_eq!(ws.roster().len(), 7);
            assert_eq!(ws.board().allocations().len(), 5);
            assert_eq!(ws.venues().len(), 4);

            // ra-1 and ra-2 come pre-filled to capacity.
            let partition = ws.partition();
            let filled: Vec<&str> =
                partition.filled.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(filled, vec!["ra-1", "ra-2"]);
            assert_eq!(partition.available.len(), 3);
        })
        .await
        .unwrap();
}

// =========================================================================
// Assignment flows
// =========================================================================

#[tokio::test]
async fn test_assign_and_reject_through_the_workspace() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            // Kavita into the suite: plenty of space.
            let outcome = ws.assign(gid("sg-6"), &aid("ra-3")).unwrap();
            assert!(outcome.created_group);
            assert_eq!(outcome.occupancy, 1);

            // Arjun onto the pre-filled deluxe room: rejected untouched.
            let result = ws.assign(gid("sg-7"), &aid("ra-1"));
            match result {
                Err(GuestdeckError::Allocation(
                    AllocationError::CapacityExceeded { remaining, .. },
                )) => assert_eq!(remaining, 0),
                other => panic!("expected CapacityExceeded, got {other:?}"),
            }
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_family_fills_premium_room_exactly() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            let outcome = ws.assign(gid("sg-5"), &aid("ra-4")).unwrap();
            assert_eq!(outcome.occupancy, 3);

            let partition = ws.partition();
            assert!(partition.filled.iter().any(|a| a.id.as_str() == "ra-4"));
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_room_filter_through_the_workspace() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            ws.set_room_filter(RoomFilter::RoomType("Premium Room".into()));
            let partition = ws.partition();
            assert_eq!(partition.available.len(), 2);
            assert!(partition.filled.is_empty());
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_published_groups_reflect_the_latest_operation() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            // The seed groups are visible before any operation.
            assert_eq!(ws.published_groups().len(), 2);

            ws.assign(gid("sg-6"), &aid("ra-3")).unwrap();
            ws.assign(gid("sg-7"), &aid("ra-3")).unwrap();

            let published = ws.published_groups();
            assert_eq!(published.len(), 3);
            let suite_group = published
                .iter()
                .find(|g| g.allocation_id == aid("ra-3"))
                .expect("suite group was published");
            assert_eq!(suite_group.guest_ids, vec![gid("sg-6"), gid("sg-7")]);
        })
        .await
        .unwrap();
}

// =========================================================================
// Roster/board consistency
// =========================================================================

#[tokio::test]
async fn test_deleting_a_housed_guest_releases_the_seat() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            // sg-1 sits in rg-1 (Parents Room) in the seed.
            assert!(ws.board().assignment_of(&gid("sg-1")).is_some());

            let outcome = ws
                .delete_guest(&gid("sg-1"), Confirmation::Confirmed)
                .unwrap();
            assert_eq!(outcome, RemovalOutcome::Removed(vec![gid("sg-1")]));

            assert_eq!(ws.roster().len(), 6);
            assert!(ws.board().assignment_of(&gid("sg-1")).is_none());
            assert_eq!(ws.board().occupancy(&GroupId::new("rg-1")), 1);

            // The room reopened and the published snapshot agrees.
            assert!(ws
                .partition()
                .available
                .iter()
                .any(|a| a.id.as_str() == "ra-1"));
            let published = ws.published_groups();
            let parents = published
                .iter()
                .find(|g| g.id == GroupId::new("rg-1"))
                .expect("group persists after removal");
            assert_eq!(parents.guest_ids, vec![gid("sg-2")]);
            assert_eq!(parents.custom_label.as_deref(), Some("Parents Room"));
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cancelled_deletion_changes_nothing() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            let outcome = ws
                .delete_guest(&gid("sg-1"), Confirmation::Cancelled)
                .unwrap();
            assert_eq!(outcome, RemovalOutcome::Cancelled);
            assert_eq!(ws.roster().len(), 7);
            assert!(ws.board().assignment_of(&gid("sg-1")).is_some());
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bulk_deletion_releases_every_seat() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            ws.toggle_select(&gid("sg-3")).unwrap();
            ws.toggle_select(&gid("sg-4")).unwrap();

            let outcome = ws.delete_selected(Confirmation::Confirmed);
            assert!(matches!(outcome, RemovalOutcome::Removed(ref ids) if ids.len() == 2));

            assert_eq!(ws.roster().len(), 5);
            assert_eq!(ws.board().occupancy(&GroupId::new("rg-2")), 0);
            // The emptied Siblings Room reads as available again.
            assert!(ws
                .partition()
                .available
                .iter()
                .any(|a| a.id.as_str() == "ra-2"));
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_party_size_edit_flows_into_occupancy() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            ws.assign(gid("sg-6"), &aid("ra-3")).unwrap();
            let group_id = ws
                .board()
                .assignment_of(&gid("sg-6"))
                .expect("just assigned")
                .clone();
            assert_eq!(ws.board().occupancy(&group_id), 1);

            // Kavita's record grows into a family of four.
            let mut draft = GuestDraft::named("Kavita Sharma");
            draft.age = Some(60);
            draft.guest_count = 4;
            ws.update_guest(&gid("sg-6"), draft).unwrap();

            assert_eq!(ws.board().occupancy(&group_id), 4);
            assert!(ws
                .partition()
                .filled
                .iter()
                .any(|a| a.id.as_str() == "ra-3"));
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_added_guest_is_immediately_assignable() {
    let portal = open_portal().await;

    portal
        .with_workspace(&wedding(), |ws| {
            let mut draft = GuestDraft::named("Meera Joshi");
            draft.email = Some("meera@example.com".into());
            let guest_id = ws.add_guest(draft).unwrap();

            assert_eq!(ws.roster().len(), 8);
            let outcome = ws.assign(guest_id.clone(), &aid("ra-5")).unwrap();
            assert_eq!(outcome.occupancy, 1);
            assert_eq!(ws.board().assignment_of(&guest_id), Some(&outcome.group_id));
        })
        .await
        .unwrap();
}

// =========================================================================
// Export
// =========================================================================

#[tokio::test]
async fn test_export_resolves_room_assignments() {
    let portal = open_portal().await;

    let csv = portal
        .with_workspace(&wedding(), |ws| ws.export_guest_csv())
        .await
        .unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Name,Email,Phone,Room Group");
    assert_eq!(lines[1], "Amit Sharma,amit@example.com,,rg-1");
    // sg-5 has no room in the seed.
    assert!(lines.iter().any(|l| l.starts_with("Rahul Sharma") && l.ends_with("Unassigned")));
    // Header plus one row per guest.
    assert_eq!(lines.len(), 8);
}
