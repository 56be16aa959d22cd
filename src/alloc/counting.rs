use tracing::debug;

use crate::model::*;

use super::{validate_events, AllocError};

/// Minimum number of rooms needed so that no two overlapping events share one.
///
/// Two-pointer sweep over independently sorted start and end instants. An end equal
/// to a start frees its room before the start claims one, so back-to-back events
/// `[0, 10)` and `[10, 20)` fit in a single room.
pub fn minimum_rooms(events: &[Event]) -> Result<usize, AllocError> {
    validate_events(events)?;
    if events.is_empty() {
        return Ok(0);
    }

    let mut starts: Vec<Ms> = events.iter().map(|e| e.start).collect();
    let mut ends: Vec<Ms> = events.iter().map(|e| e.end).collect();
    starts.sort_unstable();
    ends.sort_unstable();

    let mut active = 0usize;
    let mut peak = 0usize;
    let mut s = 0usize;
    let mut e = 0usize;

    // `e` stays in bounds: an end <= starts[s] belongs to an event whose start is
    // strictly smaller, so at most `s` ends are ever consumed.
    while s < starts.len() {
        if starts[s] < ends[e] {
            active += 1;
            s += 1;
            peak = peak.max(active);
        } else {
            active -= 1;
            e += 1;
        }
    }

    debug!(events = events.len(), rooms = peak, "counted minimum rooms");
    Ok(peak)
}
