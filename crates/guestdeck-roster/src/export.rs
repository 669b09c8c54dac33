//! CSV export of the guest list.
//!
//! The export is the organizer's spreadsheet handoff: one row per guest,
//! with the room column resolved through a lookup the caller supplies
//! (the roster itself doesn't know about rooms).

use guestdeck_model::{GroupId, Guest, GuestId};

/// The header row of every export.
pub const CSV_HEADER: &str = "Name,Email,Phone,Room Group";

/// Renders guests as CSV in iteration order.
///
/// `assignment_of` maps a guest to the room group currently holding them;
/// guests without one get the literal `Unassigned`.
pub fn export_csv<'a, I, F>(guests: I, assignment_of: F) -> String
where
    I: IntoIterator<Item = &'a Guest>,
    F: Fn(&GuestId) -> Option<GroupId>,
{
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for guest in guests {
        let room = assignment_of(&guest.id)
            .map(|group_id| group_id.as_str().to_string())
            .unwrap_or_else(|| "Unassigned".to_string());

        let row = [
            field(&guest.name),
            field(guest.email.as_deref().unwrap_or("")),
            field(guest.phone.as_deref().unwrap_or("")),
            field(&room),
        ]
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// Quotes a field when it contains a separator, quote, or newline.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
