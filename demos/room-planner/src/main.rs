//! Walks the portal through a full room-planning session against the
//! sample dataset: refresh events, open the wedding workspace, place
//! guests (including a rejection and a cross-room move), then print the
//! organizer's CSV handoff.
//!
//! Run with `RUST_LOG=debug` to watch the board's state transitions.

use guestdeck::prelude::*;
use guestdeck::sample;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let portal = Portal::new(StaticDirectory::new(sample::sample_events()));
    let count = portal.refresh_events().await?;
    println!("loaded {count} events:");
    for event in portal.events().await {
        println!(
            "  {} — {} ({}, inventory risk {:?})",
            event.id, event.name, event.location, event.inventory_risk()
        );
    }

    let wedding = EventId::new("1");
    portal.open_workspace(&wedding, sample::sample_seed()).await?;
    tracing::info!(event_id = %wedding, "planning session started");

    portal
        .with_workspace(&wedding, |ws| walk_the_board(ws))
        .await??;

    let csv = portal
        .with_workspace(&wedding, |ws| ws.export_guest_csv())
        .await?;
    println!("\nguest list export:\n{csv}");

    Ok(())
}

fn walk_the_board(ws: &mut EventWorkspace) -> Result<(), GuestdeckError> {
    print_board(ws, "initial board");

    // Kavita takes a suite seat.
    let outcome = ws.assign(GuestId::new("sg-6"), &AllocationId::new("ra-3"))?;
    println!(
        "assigned sg-6 to ra-3: group {} now holds {}",
        outcome.group_id, outcome.occupancy
    );

    // The Rahul family (3 people) can't join a deluxe room that the
    // seed already filled — the error names the numbers.
    match ws.assign(GuestId::new("sg-5"), &AllocationId::new("ra-1")) {
        Err(err) => println!("rejected as expected: {err}"),
        Ok(_) => unreachable!("ra-1 is at capacity"),
    }

    // The family fits a premium room exactly.
    let outcome = ws.assign(GuestId::new("sg-5"), &AllocationId::new("ra-4"))?;
    println!(
        "assigned sg-5 to ra-4: group {} now holds {}",
        outcome.group_id, outcome.occupancy
    );

    // Arjun joins Kavita, then moves to the other premium room.
    ws.assign(GuestId::new("sg-7"), &AllocationId::new("ra-3"))?;
    let outcome = ws.assign(GuestId::new("sg-7"), &AllocationId::new("ra-5"))?;
    println!(
        "moved sg-7 to ra-5: group {} now holds {}",
        outcome.group_id, outcome.occupancy
    );

    // Kavita's plans change: take her back off the suite.
    let suite_group = ws
        .board()
        .assignment_of(&GuestId::new("sg-6"))
        .expect("sg-6 was just assigned")
        .clone();
    ws.remove_from_room(&GuestId::new("sg-6"), &suite_group)?;
    println!(
        "removed sg-6 from {}: group now holds {}",
        suite_group,
        ws.board().occupancy(&suite_group)
    );

    // Narrow the view to premium rooms only.
    ws.set_room_filter(RoomFilter::RoomType("Premium Room".into()));
    print_board(ws, "premium rooms only");
    ws.set_room_filter(RoomFilter::All);

    print_board(ws, "final board");
    println!(
        "published snapshot carries {} groups",
        ws.published_groups().len()
    );
    Ok(())
}

fn print_board(ws: &EventWorkspace, heading: &str) {
    let partition = ws.partition();
    println!("\n{heading}:");
    println!("  available:");
    for allocation in &partition.available {
        let occupancy = ws
            .board()
            .group_for(&allocation.id)
            .map(|g| ws.board().occupancy(&g.id))
            .unwrap_or(0);
        println!(
            "    {} {} @ {} — {}/{}",
            allocation.id,
            allocation.room_type,
            allocation.hotel_name,
            occupancy,
            allocation.max_capacity
        );
    }
    println!("  filled:");
    for allocation in &partition.filled {
        println!(
            "    {} {} @ {}",
            allocation.id, allocation.room_type, allocation.hotel_name
        );
    }
    let unassigned: Vec<&str> = ws.unassigned().iter().map(|g| g.name.as_str()).collect();
    println!("  unassigned: {}", unassigned.join(", "));
}
