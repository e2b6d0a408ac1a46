//! Join of an event RSVPs with its members, and the CSV export of the result.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use failure::Error;
use crate::campfire::model::{Event, Member};

pub const CSV_HEADER: [&'static str; 3] = ["id", "name", "status"];

#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub status: &'a str
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster<'a> {
    /// One row per RSVP with a matching member, in RSVP order
    pub rows: Vec<RosterRow<'a>>,
    /// User ids of the RSVPs without matching member
    pub unmatched: Vec<&'a str>
}

fn members_by_id(event: &Event) -> HashMap<&str, &Member> {
    let mut members = HashMap::with_capacity(event.members.edges.len());
    for edge in &event.members.edges {
        // First edge wins on duplicated ids
        if let Entry::Vacant(entry) = members.entry(edge.node.id.as_str()) {
            entry.insert(&edge.node);
        }
    }
    members
}

/// Match every RSVP of `event` with the member having the same id.
///
/// RSVPs without member are logged and left out of the rows.
pub fn build_roster(event: &Event) -> Roster {
    let members = members_by_id(event);
    event.rsvp_statuses.iter().fold(Roster::default(), |mut roster, rsvp| {
        match members.get(rsvp.user_id.as_str()) {
            Some(&member) => roster.rows.push(RosterRow {
                id: &rsvp.user_id,
                name: &member.display_name,
                status: &rsvp.rsvp_status,
            }),
            None => {
                warn!("RSVP member {} not found", rsvp.user_id);
                roster.unmatched.push(&rsvp.user_id);
            }
        }
        roster
    })
}

/// Write the CSV header followed by one record per row.
pub fn write_roster<W: Write>(writer: W, rows: &[RosterRow]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record(&[row.id, row.name, row.status])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export `rows` to the CSV file at `path`, truncating any existing file.
pub fn export_roster(path: &Path, rows: &[RosterRow]) -> Result<(), Error> {
    let file = File::create(path)?;
    write_roster(file, rows)
}
